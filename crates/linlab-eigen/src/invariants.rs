//! Determinant, trace and principal minors of an effective matrix.
//!
//! All functions here expect the matrix the user sees after the scalar multiplier has been
//! applied (`M = k·A`); see [`crate::SquareMatrix::effective`].

use linlab_algebra::{Mat2F64, Mat3F64};

/// Scalar invariants of a square matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Invariants {
    /// The determinant.
    pub determinant: f64,
    /// The trace, sum of the diagonal entries.
    pub trace: f64,
}

impl Invariants {
    /// Invariants of a 2x2 matrix.
    pub fn from_mat2(m: &Mat2F64) -> Self {
        Self {
            determinant: determinant2(m),
            trace: m.entry(0, 0) + m.entry(1, 1),
        }
    }

    /// Invariants of a 3x3 matrix.
    pub fn from_mat3(m: &Mat3F64) -> Self {
        Self {
            determinant: determinant3(m),
            trace: m.entry(0, 0) + m.entry(1, 1) + m.entry(2, 2),
        }
    }
}

/// Determinant of a 2x2 matrix, `ad - bc`.
pub fn determinant2(m: &Mat2F64) -> f64 {
    m.entry(0, 0) * m.entry(1, 1) - m.entry(0, 1) * m.entry(1, 0)
}

/// Determinant of a 3x3 matrix by cofactor expansion along the first row.
pub fn determinant3(m: &Mat3F64) -> f64 {
    let [[a11, a12, a13], [a21, a22, a23], [a31, a32, a33]] = m.to_rows();
    a11 * (a22 * a33 - a23 * a32) - a12 * (a21 * a33 - a23 * a31) + a13 * (a21 * a32 - a22 * a31)
}

/// Sum of the three 2x2 principal minors of a 3x3 matrix.
///
/// This is the coefficient of the linear term of the characteristic polynomial.
pub fn principal_minor_sum(m: &Mat3F64) -> f64 {
    let [[a11, a12, a13], [a21, a22, a23], [a31, a32, a33]] = m.to_rows();
    (a11 * a22 - a12 * a21) + (a11 * a33 - a13 * a31) + (a22 * a33 - a23 * a32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariants_mat2() {
        let inv = Invariants::from_mat2(&Mat2F64::IDENTITY);
        assert_eq!(inv.determinant, 1.0);
        assert_eq!(inv.trace, 2.0);

        let inv = Invariants::from_mat2(&Mat2F64::from_rows([[3.0, 0.0], [0.0, -2.0]]));
        assert_eq!(inv.determinant, -6.0);
        assert_eq!(inv.trace, 1.0);

        let inv = Invariants::from_mat2(&Mat2F64::from_rows([[0.0, -1.0], [1.0, 0.0]]));
        assert_eq!(inv.determinant, 1.0);
        assert_eq!(inv.trace, 0.0);
    }

    #[test]
    fn test_invariants_mat3() {
        let m = Mat3F64::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]]);
        let inv = Invariants::from_mat3(&m);
        // 2 * (3 - 2) - 0 + 1 * (1 - 3)
        assert_eq!(inv.determinant, 0.0);
        assert_eq!(inv.trace, 6.0);
    }

    #[test]
    fn test_principal_minor_sum() {
        let m = Mat3F64::IDENTITY.scaled(2.0);
        assert_eq!(principal_minor_sum(&m), 12.0);

        let m = Mat3F64::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        // (5 - 8) + (10 - 21) + (50 - 48)
        assert_eq!(principal_minor_sum(&m), -12.0);
    }

    #[test]
    fn test_determinant_repeated_rows() {
        let m = Mat2F64::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(determinant2(&m), 0.0);

        let m = Mat3F64::from_rows([[1.0, 2.0, 3.0], [1.0, 2.0, 3.0], [0.5, -1.0, 4.0]]);
        assert!(determinant3(&m).abs() < 1e-12);
    }
}
