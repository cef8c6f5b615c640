#![deny(missing_docs)]
//! Fixed-size algebraic types for linlab.
//!
//! The types are thin wrappers over the `glam` double precision backend, so the analysis engine
//! can speak in row-major matrices and labelled vectors without leaking the backend everywhere.

mod matrix;
mod vector;

pub use matrix::{Mat2F64, Mat3F64};
pub use vector::{Vec2F64, Vec3F64};
