//! 2x2 matrix (double precision).

use crate::Vec2F64;

define_matrix_type!(
    /// 2x2 matrix (double precision).
    Mat2F64,
    glam::DMat2,
    [f64; 4],
    [[f64; 2]; 2],
    Vec2F64,
    glam::DVec2,
    [x_axis, y_axis]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat2f64_from_rows() {
        let m = Mat2F64::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.entry(0, 1), 2.0);
        assert_eq!(m.entry(1, 0), 3.0);
        assert_eq!(m.col(0), Vec2F64::new(1.0, 3.0));
        assert_eq!(m.row(0), Vec2F64::new(1.0, 2.0));
        assert_eq!(m.to_rows(), [[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_mat2f64_mul_vec2() {
        let m = Mat2F64::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m * Vec2F64::new(1.0, 1.0), Vec2F64::new(3.0, 7.0));
        assert_eq!(Mat2F64::IDENTITY * Vec2F64::new(5.0, -1.0), Vec2F64::new(5.0, -1.0));
    }

    #[test]
    fn test_mat2f64_scaled_transpose() {
        let m = Mat2F64::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.scaled(2.0).to_rows(), [[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!(m.transpose().to_rows(), [[1.0, 3.0], [2.0, 4.0]]);
    }
}
