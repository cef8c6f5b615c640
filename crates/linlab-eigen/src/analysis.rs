//! Dimension generic entry points of the engine.
//!
//! [`SquareMatrix`] is implemented for [`Mat2F64`] and [`Mat3F64`] and routes every operation to
//! the closed-form or sampled implementation of its dimensionality.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use linlab_algebra::{Mat2F64, Mat3F64, Vec2F64, Vec3F64};

use crate::charpoly::CharPoly;
use crate::eigen::{eigenpairs2, eigenpairs3, Eigenpair, RootScan};
use crate::error::TransformError;
use crate::invariants::{principal_minor_sum, Invariants};
use crate::transform::{inverse2, inverse3};

/// Vectors the engine can measure and round.
pub trait EuclideanVector:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Euclidean length.
    fn norm(self) -> f64;

    /// Round every component to `decimals` decimal places.
    fn round_to(self, decimals: i32) -> Self;
}

/// A 2x2 or 3x3 real matrix acting on [`SquareMatrix::Vector`].
pub trait SquareMatrix: Copy + Debug + PartialEq {
    /// The vector type the matrix acts on.
    type Vector: EuclideanVector;

    /// Number of rows and columns.
    const DIM: usize;

    /// The identity matrix.
    const IDENTITY: Self;

    /// The effective matrix `k·A` the user sees for the scalar multiplier `k`.
    fn effective(&self, scalar: f64) -> Self;

    /// Determinant and trace.
    fn invariants(&self) -> Invariants;

    /// The characteristic polynomial `det(M - λI)`.
    fn characteristic_polynomial(&self) -> CharPoly;

    /// Real eigenpairs; `scan` only applies to matrices solved numerically.
    fn eigenpairs(&self, scan: &RootScan) -> Vec<Eigenpair<Self::Vector>>;

    /// The matrix-vector product `Mv`.
    fn apply(&self, v: Self::Vector) -> Self::Vector;

    /// The inverse by the adjugate formula, or [`TransformError::Singular`].
    fn try_inverse(&self) -> Result<Self, TransformError>;

    /// The transposed matrix.
    fn transposed(&self) -> Self;

    /// The `i`-th standard basis vector.
    fn basis(i: usize) -> Self::Vector;
}

impl EuclideanVector for Vec2F64 {
    fn norm(self) -> f64 {
        self.length()
    }

    fn round_to(self, decimals: i32) -> Self {
        let scale = 10f64.powi(decimals);
        self.map(|c| (c * scale).round() / scale)
    }
}

impl EuclideanVector for Vec3F64 {
    fn norm(self) -> f64 {
        self.length()
    }

    fn round_to(self, decimals: i32) -> Self {
        let scale = 10f64.powi(decimals);
        self.map(|c| (c * scale).round() / scale)
    }
}

impl SquareMatrix for Mat2F64 {
    type Vector = Vec2F64;

    const DIM: usize = 2;

    const IDENTITY: Self = Mat2F64::IDENTITY;

    fn effective(&self, scalar: f64) -> Self {
        self.scaled(scalar)
    }

    fn invariants(&self) -> Invariants {
        Invariants::from_mat2(self)
    }

    fn characteristic_polynomial(&self) -> CharPoly {
        CharPoly::quadratic(&self.invariants())
    }

    fn eigenpairs(&self, _scan: &RootScan) -> Vec<Eigenpair<Vec2F64>> {
        eigenpairs2(self)
    }

    fn apply(&self, v: Vec2F64) -> Vec2F64 {
        *self * v
    }

    fn try_inverse(&self) -> Result<Self, TransformError> {
        inverse2(self)
    }

    fn transposed(&self) -> Self {
        self.transpose()
    }

    fn basis(i: usize) -> Vec2F64 {
        match i {
            0 => Vec2F64::X,
            _ => Vec2F64::Y,
        }
    }
}

impl SquareMatrix for Mat3F64 {
    type Vector = Vec3F64;

    const DIM: usize = 3;

    const IDENTITY: Self = Mat3F64::IDENTITY;

    fn effective(&self, scalar: f64) -> Self {
        self.scaled(scalar)
    }

    fn invariants(&self) -> Invariants {
        Invariants::from_mat3(self)
    }

    fn characteristic_polynomial(&self) -> CharPoly {
        CharPoly::cubic(&self.invariants(), principal_minor_sum(self))
    }

    fn eigenpairs(&self, scan: &RootScan) -> Vec<Eigenpair<Vec3F64>> {
        eigenpairs3(self, scan)
    }

    fn apply(&self, v: Vec3F64) -> Vec3F64 {
        *self * v
    }

    fn try_inverse(&self) -> Result<Self, TransformError> {
        inverse3(self)
    }

    fn transposed(&self) -> Self {
        self.transpose()
    }

    fn basis(i: usize) -> Vec3F64 {
        match i {
            0 => Vec3F64::X,
            1 => Vec3F64::Y,
            _ => Vec3F64::Z,
        }
    }
}

/// Everything the engine derives from a matrix and its scalar multiplier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis<V> {
    /// Determinant and trace of the effective matrix.
    pub invariants: Invariants,
    /// Characteristic polynomial of the effective matrix.
    pub char_poly: CharPoly,
    /// Real eigenpairs of the effective matrix, possibly empty.
    pub eigenpairs: Vec<Eigenpair<V>>,
}

impl<V> Analysis<V> {
    /// Returns false when every eigenvalue is complex (or out of the scan window).
    pub fn has_real_eigenvalues(&self) -> bool {
        !self.eigenpairs.is_empty()
    }
}

/// Analyze `matrix` scaled by `scalar` with the default root scan.
///
/// Example:
///
/// ```
/// use linlab_algebra::Mat2F64;
/// use linlab_eigen::analyze;
///
/// let analysis = analyze(&Mat2F64::from_rows([[3.0, 0.0], [0.0, -2.0]]), 1.0);
/// assert_eq!(analysis.invariants.determinant, -6.0);
/// assert_eq!(analysis.eigenpairs.len(), 2);
/// ```
pub fn analyze<M: SquareMatrix>(matrix: &M, scalar: f64) -> Analysis<M::Vector> {
    analyze_with(matrix, scalar, &RootScan::default())
}

/// Analyze `matrix` scaled by `scalar` with explicit root scan parameters.
pub fn analyze_with<M: SquareMatrix>(
    matrix: &M,
    scalar: f64,
    scan: &RootScan,
) -> Analysis<M::Vector> {
    let effective = matrix.effective(scalar);
    let invariants = effective.invariants();
    let char_poly = effective.characteristic_polynomial();
    let eigenpairs = effective.eigenpairs(scan);

    log::debug!(
        "analyzed {dim}x{dim} matrix: det={det}, trace={trace}, {n} real eigenpairs",
        dim = M::DIM,
        det = invariants.determinant,
        trace = invariants.trace,
        n = eigenpairs.len()
    );

    Analysis {
        invariants,
        char_poly,
        eigenpairs,
    }
}
