//! 3D vector (double precision).

define_vector_type!(
    /// 3D vector (double precision).
    Vec3F64,
    glam::DVec3,
    [f64; 3],
    [x, y, z]
);

impl Vec3F64 {
    /// Unit vector along the x axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along the y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along the z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Cross product `self × rhs`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let a: glam::DVec3 = self.into();
        let b: glam::DVec3 = rhs.into();
        Self::from(a.cross(b))
    }
}
