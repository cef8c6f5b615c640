//! Forward and inverse application of the effective matrix.
//!
//! Forward mapping is always defined. Inverse mapping, used to turn a pointer position back
//! into the vector the user is dragging, needs a non-singular matrix and a non-zero scalar.

use linlab_algebra::{Mat2F64, Mat3F64, Vec2F64};

use crate::analysis::SquareMatrix;
use crate::error::TransformError;
use crate::invariants::{determinant2, determinant3};

/// A matrix whose determinant magnitude is below this value has no inverse.
pub const SINGULAR_DETERMINANT_EPSILON: f64 = 1e-6;

/// Smallest scalar multiplier magnitude used when dividing by the scalar.
pub const SCALAR_FLOOR: f64 = 1e-6;

/// Replace a scalar multiplier too close to zero by [`SCALAR_FLOOR`], keeping its sign.
///
/// Zero (of either sign) maps to `+SCALAR_FLOOR`.
pub fn effective_scalar(scalar: f64) -> f64 {
    if scalar.abs() >= SCALAR_FLOOR {
        scalar
    } else if scalar < 0.0 {
        -SCALAR_FLOOR
    } else {
        SCALAR_FLOOR
    }
}

/// Inverse of a 2x2 matrix.
pub fn inverse2(m: &Mat2F64) -> Result<Mat2F64, TransformError> {
    let det = determinant2(m);
    if det.abs() < SINGULAR_DETERMINANT_EPSILON {
        return Err(TransformError::Singular { determinant: det });
    }
    let [[a, b], [c, d]] = m.to_rows();
    Ok(Mat2F64::from_rows([
        [d / det, -b / det],
        [-c / det, a / det],
    ]))
}

/// Inverse of a 3x3 matrix, adjugate over determinant.
pub fn inverse3(m: &Mat3F64) -> Result<Mat3F64, TransformError> {
    let det = determinant3(m);
    if det.abs() < SINGULAR_DETERMINANT_EPSILON {
        return Err(TransformError::Singular { determinant: det });
    }
    let [[a, b, c], [d, e, f], [g, h, i]] = m.to_rows();
    Ok(Mat3F64::from_rows([
        [
            (e * i - f * h) / det,
            (c * h - b * i) / det,
            (b * f - c * e) / det,
        ],
        [
            (f * g - d * i) / det,
            (a * i - c * g) / det,
            (c * d - a * f) / det,
        ],
        [
            (d * h - e * g) / det,
            (g * b - a * h) / det,
            (a * e - b * d) / det,
        ],
    ]))
}

/// Apply `matrix` scaled by `scalar` to `v`.
pub fn apply<M: SquareMatrix>(matrix: &M, scalar: f64, v: M::Vector) -> M::Vector {
    matrix.effective(scalar).apply(v)
}

/// Apply `matrix` scaled by `scalar` to every point.
pub fn apply_all<M: SquareMatrix>(matrix: &M, scalar: f64, points: &[M::Vector]) -> Vec<M::Vector> {
    let effective = matrix.effective(scalar);
    points.iter().map(|&p| effective.apply(p)).collect()
}

/// Images of the standard basis vectors, the columns of the effective matrix.
pub fn basis_images<M: SquareMatrix>(matrix: &M, scalar: f64) -> Vec<M::Vector> {
    let effective = matrix.effective(scalar);
    (0..M::DIM).map(|i| effective.apply(M::basis(i))).collect()
}

/// Corners of the image of the unit square: origin, `Mî`, `Mî + Mĵ`, `Mĵ`.
///
/// Its signed area is the determinant of the effective matrix.
pub fn unit_square_image(matrix: &Mat2F64, scalar: f64) -> [Vec2F64; 4] {
    let effective = matrix.scaled(scalar);
    let i_t = effective * Vec2F64::X;
    let j_t = effective * Vec2F64::Y;
    [Vec2F64::ZERO, i_t, i_t + j_t, j_t]
}

/// A line segment in transformed space.
pub type Segment<V> = (V, V);

/// Transformed grid lines of the plane spanned by basis vectors `u_axis` and `w_axis`.
///
/// For each integer `t` in `-extent..=extent` the lines `t·u + s·w` and `s·u + t·w`,
/// `s ∈ [-extent, extent]`, are mapped through the effective matrix. Returns
/// `2·(2·extent + 1)` segments, the `u` family first.
pub fn grid_lines<M: SquareMatrix>(
    matrix: &M,
    scalar: f64,
    u_axis: usize,
    w_axis: usize,
    extent: u32,
) -> Vec<Segment<M::Vector>> {
    let effective = matrix.effective(scalar);
    let (u, w) = (M::basis(u_axis), M::basis(w_axis));
    let e = extent as f64;
    let ticks = || (-(extent as i64)..=extent as i64).map(|t| t as f64);

    let along_w = ticks().map(|t| (u * t - w * e, u * t + w * e));
    let along_u = ticks().map(|t| (w * t - u * e, w * t + u * e));

    along_w
        .chain(along_u)
        .map(|(start, end)| (effective.apply(start), effective.apply(end)))
        .collect()
}

/// Maps points of transformed space back to their pre-image.
///
/// The inverse of the base matrix is computed once, so the map can be reused for every
/// pointer event of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseMap<M> {
    inverse: M,
    scalar: f64,
}

impl<M: SquareMatrix> InverseMap<M> {
    /// Build the inverse map of `matrix` scaled by `scalar`.
    ///
    /// Fails with [`TransformError::Singular`] when `matrix` has no inverse. A scalar close to
    /// zero is replaced by [`effective_scalar`].
    pub fn new(matrix: &M, scalar: f64) -> Result<Self, TransformError> {
        let inverse = matrix.try_inverse()?;
        Ok(Self {
            inverse,
            scalar: effective_scalar(scalar),
        })
    }

    /// The pre-image `(k·A)⁻¹·p` of `point`.
    pub fn pre_image(&self, point: M::Vector) -> M::Vector {
        self.inverse.apply(point) / self.scalar
    }

    /// The scalar multiplier after flooring.
    pub fn scalar(&self) -> f64 {
        self.scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use linlab_algebra::Vec3F64;

    #[test]
    fn test_effective_scalar() {
        assert_eq!(effective_scalar(2.0), 2.0);
        assert_eq!(effective_scalar(-0.5), -0.5);
        assert_eq!(effective_scalar(0.0), SCALAR_FLOOR);
        assert_eq!(effective_scalar(-0.0), SCALAR_FLOOR);
        assert_eq!(effective_scalar(-1e-9), -SCALAR_FLOOR);
        assert_eq!(effective_scalar(1e-9), SCALAR_FLOOR);
    }

    #[test]
    fn test_inverse2() -> Result<(), TransformError> {
        let m = Mat2F64::from_rows([[2.0, 1.0], [1.0, 1.0]]);
        let inv = inverse2(&m)?;
        assert_eq!(inv.to_rows(), [[1.0, -1.0], [-1.0, 2.0]]);
        assert_eq!(m * inv, Mat2F64::IDENTITY);
        Ok(())
    }

    #[test]
    fn test_inverse2_singular() {
        let m = Mat2F64::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(
            inverse2(&m),
            Err(TransformError::Singular { determinant: 0.0 })
        );
        // forward mapping is still defined
        assert_eq!(apply(&m, 1.0, Vec2F64::new(1.0, 1.0)), Vec2F64::new(3.0, 6.0));
    }

    #[test]
    fn test_inverse3() -> Result<(), TransformError> {
        let m = Mat3F64::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]]);
        let inv = inverse3(&m)?;
        let product = (m * inv).to_rows();
        for (r, row) in product.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_relative_eq!(value, expected, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_inverse3_singular() {
        let m = Mat3F64::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert!(matches!(
            inverse3(&m),
            Err(TransformError::Singular { .. })
        ));
    }

    #[test]
    fn test_inverse_map_roundtrip() -> Result<(), TransformError> {
        let m = Mat3F64::from_rows([[1.0, 0.5, 0.0], [0.0, 2.0, -1.0], [0.3, 0.0, 1.0]]);
        let v = Vec3F64::new(0.7, -1.2, 2.5);
        let p = apply(&m, -1.5, v);
        let map = InverseMap::new(&m, -1.5)?;
        let back = map.pre_image(p);
        assert_relative_eq!(back.x, v.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, v.y, epsilon = 1e-9);
        assert_relative_eq!(back.z, v.z, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_inverse_map_zero_scalar() -> Result<(), TransformError> {
        let map = InverseMap::new(&Mat2F64::IDENTITY, 0.0)?;
        assert_eq!(map.scalar(), SCALAR_FLOOR);
        let pre = map.pre_image(Vec2F64::new(1e-6, -2e-6));
        assert_relative_eq!(pre.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(pre.y, -2.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_basis_images_and_unit_square() {
        let m = Mat2F64::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(
            basis_images(&m, 2.0),
            vec![Vec2F64::new(2.0, 6.0), Vec2F64::new(4.0, 8.0)]
        );
        let square = unit_square_image(&m, 1.0);
        assert_eq!(square[2], Vec2F64::new(3.0, 7.0));

        let m3 = Mat3F64::IDENTITY;
        assert_eq!(
            basis_images(&m3, 1.0),
            vec![Vec3F64::X, Vec3F64::Y, Vec3F64::Z]
        );
    }

    #[test]
    fn test_grid_lines() {
        let m = Mat2F64::from_rows([[1.0, 1.0], [0.0, 1.0]]);
        let lines = grid_lines(&m, 1.0, 0, 1, 2);
        assert_eq!(lines.len(), 10);
        // x = -2 from y = -2 to y = 2, sheared
        assert_eq!(lines[0], (Vec2F64::new(-4.0, -2.0), Vec2F64::new(0.0, 2.0)));
        // y = -2 from x = -2 to x = 2
        assert_eq!(lines[5], (Vec2F64::new(-4.0, -2.0), Vec2F64::new(0.0, -2.0)));

        let lines = grid_lines(&Mat3F64::IDENTITY, 1.0, 0, 2, 1);
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|(s, e)| s.y == 0.0 && e.y == 0.0));
    }

    #[test]
    fn test_apply_all() {
        let m = Mat2F64::from_rows([[0.0, -1.0], [1.0, 0.0]]);
        let out = apply_all(&m, 1.0, &[Vec2F64::X, Vec2F64::Y]);
        assert_eq!(out, vec![Vec2F64::Y, -Vec2F64::X]);
    }
}
