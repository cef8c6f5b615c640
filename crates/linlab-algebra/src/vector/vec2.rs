//! 2D vector (double precision).

define_vector_type!(
    /// 2D vector (double precision).
    Vec2F64,
    glam::DVec2,
    [f64; 2],
    [x, y]
);

impl Vec2F64 {
    /// Unit vector along the x axis.
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit vector along the y axis.
    pub const Y: Self = Self::new(0.0, 1.0);
}
