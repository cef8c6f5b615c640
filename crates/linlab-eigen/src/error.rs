/// An error type for the inverse mapping of a transformation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum TransformError {
    /// The matrix determinant is too close to zero to invert.
    #[error("Matrix is singular (determinant {determinant:e}), no inverse available")]
    Singular {
        /// The determinant that failed the check.
        determinant: f64,
    },
}

/// An error type for editing a scene.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The vector index does not exist in the scene.
    #[error("Vector index ({0}) out of range for a scene with {1} vectors")]
    VectorIndexOutOfRange(usize, usize),

    /// The vector cannot be moved because the transformation has no inverse.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// No preset with the requested name.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// An error type for colour parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The string is not a `#rrggbb` hex colour.
    #[error("Invalid hex colour: {0}")]
    InvalidHex(String),
}
