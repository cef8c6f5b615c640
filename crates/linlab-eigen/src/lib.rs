#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! The engine is a set of pure functions of a matrix `A` and a scalar multiplier `k`; every
//! quantity is computed on the effective matrix `M = k·A`:
//!
//! * [`invariants`]: determinant and trace.
//! * [`charpoly`]: characteristic polynomial coefficients.
//! * [`eigen`]: real eigenvalues and eigenvectors.
//! * [`transform`]: forward mapping of points and inverse mapping of pointer positions.
//!
//! [`scene`] bundles a matrix with labelled vectors the way the visualizer edits them.

/// Characteristic polynomials.
pub mod charpoly;

/// Display colours.
pub mod color;

/// Real eigenpairs.
pub mod eigen;

/// Error types for the engine.
pub mod error;

/// Scalar invariants.
pub mod invariants;

/// Named example matrices.
pub mod presets;

/// Editable visualizer state.
pub mod scene;

/// Forward and inverse transforms.
pub mod transform;

mod analysis;

pub use analysis::{analyze, analyze_with, Analysis, EuclideanVector, SquareMatrix};
pub use charpoly::CharPoly;
pub use eigen::{Eigenpair, RootScan};
pub use error::{ColorError, SceneError, TransformError};
pub use invariants::Invariants;
pub use scene::{Scene, Scene2, Scene3};
