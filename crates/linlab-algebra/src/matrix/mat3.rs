//! 3x3 matrix (double precision).

use crate::Vec3F64;

define_matrix_type!(
    /// 3x3 matrix (double precision).
    Mat3F64,
    glam::DMat3,
    [f64; 9],
    [[f64; 3]; 3],
    Vec3F64,
    glam::DVec3,
    [x_axis, y_axis, z_axis]
);
