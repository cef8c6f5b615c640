//! Matrix types module.
//!
//! This module provides matrix types for linlab:
//! - Mat2F64: 2x2 matrix
//! - Mat3F64: 3x3 matrix

#[macro_use]
mod mat;

mod mat2;
mod mat3;

pub use mat2::Mat2F64;
pub use mat3::Mat3F64;
