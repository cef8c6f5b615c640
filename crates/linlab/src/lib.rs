#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! ```
//! use linlab::algebra::Mat2F64;
//! use linlab::eigen::analyze;
//!
//! let shear = Mat2F64::from_rows([[1.0, 1.0], [0.0, 1.0]]);
//! let analysis = analyze(&shear, 1.0);
//! assert_eq!(analysis.invariants.determinant, 1.0);
//! assert_eq!(analysis.char_poly.to_string(), "\\lambda^2 - 2.00\\lambda + 1.00 = 0");
//! ```

#[doc(inline)]
pub use linlab_algebra as algebra;

#[doc(inline)]
pub use linlab_eigen as eigen;
