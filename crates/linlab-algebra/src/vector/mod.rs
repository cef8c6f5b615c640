//! Vector types module.
//!
//! This module provides vector types for linlab:
//! - Vec2F64: 2D vector
//! - Vec3F64: 3D vector

#[macro_use]
mod vec;

mod vec2;
mod vec3;

pub use vec2::Vec2F64;
pub use vec3::Vec3F64;
