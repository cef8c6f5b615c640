//! Editable visualizer state: a matrix, its scalar multiplier and a set of labelled vectors.
//!
//! A [`Scene`] is a plain value. Every derived quantity is recomputed from it on demand, so a
//! scene can be cloned, compared, or serialized by sharing glue without any hidden state.

use linlab_algebra::{Mat2F64, Mat3F64, Vec2F64, Vec3F64};

use crate::analysis::{analyze_with, Analysis, EuclideanVector, SquareMatrix};
use crate::color::Color;
use crate::eigen::RootScan;
use crate::error::SceneError;
use crate::presets::{preset_2d, preset_3d};
use crate::transform::{apply_all, InverseMap};

/// Dragged vectors are stored with this many decimals.
pub const DRAG_DECIMALS: i32 = 2;

/// A user vector with its display metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledVector<V> {
    /// Coordinates before the transformation.
    pub vector: V,
    /// Display label.
    pub label: String,
    /// Display colour.
    pub color: Color,
}

impl<V> LabeledVector<V> {
    /// Create a labelled vector.
    pub fn new(vector: V, label: impl Into<String>, color: Color) -> Self {
        Self {
            vector,
            label: label.into(),
            color,
        }
    }
}

/// Matrices with a default set of labelled vectors.
pub trait InitialVectors: SquareMatrix {
    /// The vectors a fresh scene starts with.
    fn initial_vectors() -> Vec<LabeledVector<Self::Vector>>;
}

impl InitialVectors for Mat2F64 {
    fn initial_vectors() -> Vec<LabeledVector<Vec2F64>> {
        vec![
            LabeledVector::new(Vec2F64::X, "î", Color::from_u32(0x60a5fa)),
            LabeledVector::new(Vec2F64::Y, "ĵ", Color::from_u32(0xf87171)),
            LabeledVector::new(Vec2F64::new(1.0, 1.0), "v", Color::from_u32(0x34d399)),
        ]
    }
}

impl InitialVectors for Mat3F64 {
    fn initial_vectors() -> Vec<LabeledVector<Vec3F64>> {
        vec![
            LabeledVector::new(Vec3F64::X, "î", Color::from_u32(0x60a5fa)),
            LabeledVector::new(Vec3F64::Y, "ĵ", Color::from_u32(0xf87171)),
            LabeledVector::new(Vec3F64::Z, "k̂", Color::from_u32(0xfb923c)),
        ]
    }
}

/// Matrix, scalar multiplier and vectors of one visualizer mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "M: serde::Serialize, M::Vector: serde::Serialize",
        deserialize = "M: serde::Deserialize<'de>, M::Vector: serde::Deserialize<'de>"
    ))
)]
pub struct Scene<M: SquareMatrix> {
    /// The base matrix `A`.
    pub matrix: M,
    /// The scalar multiplier `k`.
    pub scalar: f64,
    /// The user vectors.
    pub vectors: Vec<LabeledVector<M::Vector>>,
}

/// A 2D scene.
pub type Scene2 = Scene<Mat2F64>;

/// A 3D scene.
pub type Scene3 = Scene<Mat3F64>;

impl<M: InitialVectors> Default for Scene<M> {
    fn default() -> Self {
        Self {
            matrix: M::IDENTITY,
            scalar: 1.0,
            vectors: M::initial_vectors(),
        }
    }
}

impl<M: SquareMatrix> Scene<M> {
    /// Create a scene from its parts.
    pub fn new(matrix: M, scalar: f64, vectors: Vec<LabeledVector<M::Vector>>) -> Self {
        Self {
            matrix,
            scalar,
            vectors,
        }
    }

    /// The effective matrix `k·A`.
    pub fn effective_matrix(&self) -> M {
        self.matrix.effective(self.scalar)
    }

    /// Invariants, characteristic polynomial and eigenpairs with the default root scan.
    pub fn analyze(&self) -> Analysis<M::Vector> {
        self.analyze_with(&RootScan::default())
    }

    /// Invariants, characteristic polynomial and eigenpairs.
    pub fn analyze_with(&self, scan: &RootScan) -> Analysis<M::Vector> {
        analyze_with(&self.matrix, self.scalar, scan)
    }

    /// The user vectors after the transformation, in scene order.
    pub fn transformed_vectors(&self) -> Vec<M::Vector> {
        let points: Vec<M::Vector> = self.vectors.iter().map(|v| v.vector).collect();
        apply_all(&self.matrix, self.scalar, &points)
    }

    /// Replace the base matrix by its transpose.
    pub fn transpose_matrix(&mut self) {
        self.matrix = self.matrix.transposed();
    }

    /// Reset the base matrix to the identity.
    pub fn reset_matrix(&mut self) {
        self.matrix = M::IDENTITY;
    }

    /// Move vector `index` so that its image lands on `pointer`.
    ///
    /// The pre-image is rounded to [`DRAG_DECIMALS`] decimals and stored. When the matrix has
    /// no inverse the scene is left untouched and the error is returned.
    pub fn drag_vector(
        &mut self,
        index: usize,
        pointer: M::Vector,
    ) -> Result<M::Vector, SceneError> {
        let len = self.vectors.len();
        let target = self
            .vectors
            .get_mut(index)
            .ok_or(SceneError::VectorIndexOutOfRange(index, len))?;

        let inverse = InverseMap::new(&self.matrix, self.scalar).inspect_err(|e| {
            log::debug!("drag of vector {index} suppressed: {e}");
        })?;

        let pre_image = inverse.pre_image(pointer).round_to(DRAG_DECIMALS);
        target.vector = pre_image;
        Ok(pre_image)
    }
}

impl<M: InitialVectors> Scene<M> {
    /// Restore vector `index` to its initial value, keeping its position in the list.
    pub fn reset_vector(&mut self, index: usize) -> Result<(), SceneError> {
        let len = self.vectors.len();
        let initial = M::initial_vectors()
            .into_iter()
            .nth(index)
            .ok_or(SceneError::VectorIndexOutOfRange(index, len))?;
        let target = self
            .vectors
            .get_mut(index)
            .ok_or(SceneError::VectorIndexOutOfRange(index, len))?;
        *target = initial;
        Ok(())
    }

    /// Restore the identity matrix, unit scalar and initial vectors.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

impl Scene2 {
    /// Replace the base matrix by the named 2x2 preset.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), SceneError> {
        self.matrix = preset_2d(name).ok_or_else(|| SceneError::UnknownPreset(name.to_string()))?;
        Ok(())
    }
}

impl Scene3 {
    /// Replace the base matrix by the named 3x3 preset.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), SceneError> {
        self.matrix = preset_3d(name).ok_or_else(|| SceneError::UnknownPreset(name.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;

    #[test]
    fn test_default_scene() {
        let scene = Scene2::default();
        assert_eq!(scene.matrix, Mat2F64::IDENTITY);
        assert_eq!(scene.scalar, 1.0);
        assert_eq!(scene.vectors.len(), 3);
        assert_eq!(scene.vectors[2].label, "v");
        assert_eq!(scene.vectors[2].color.to_string(), "#34d399");

        let scene = Scene3::default();
        assert_eq!(scene.vectors[2].label, "k̂");
        assert_eq!(scene.vectors[2].vector, Vec3F64::Z);
    }

    #[test]
    fn test_transformed_vectors() {
        let mut scene = Scene2::default();
        scene.matrix = Mat2F64::from_rows([[1.0, 1.0], [0.0, 1.0]]);
        scene.scalar = 2.0;
        assert_eq!(
            scene.transformed_vectors(),
            vec![
                Vec2F64::new(2.0, 0.0),
                Vec2F64::new(2.0, 2.0),
                Vec2F64::new(4.0, 2.0)
            ]
        );
    }

    #[test]
    fn test_drag_vector() -> Result<(), SceneError> {
        let mut scene = Scene2::default();
        scene.matrix = Mat2F64::from_rows([[2.0, 0.0], [0.0, 4.0]]);
        let moved = scene.drag_vector(2, Vec2F64::new(1.0, 1.0))?;
        assert_eq!(moved, Vec2F64::new(0.5, 0.25));
        // rounded to two decimals
        let moved = scene.drag_vector(2, Vec2F64::new(1.0, 1.0 / 3.0))?;
        assert_eq!(moved, Vec2F64::new(0.5, 0.08));
        assert_eq!(scene.vectors[2].vector, Vec2F64::new(0.5, 0.08));
        Ok(())
    }

    #[test]
    fn test_drag_vector_singular() {
        let mut scene = Scene2::default();
        scene.matrix = Mat2F64::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        let before = scene.clone();
        assert_eq!(
            scene.drag_vector(0, Vec2F64::new(1.0, 1.0)),
            Err(SceneError::Transform(TransformError::Singular {
                determinant: 0.0
            }))
        );
        assert_eq!(scene, before);
        // forward transform still works
        assert_eq!(scene.transformed_vectors()[2], Vec2F64::new(3.0, 6.0));
    }

    #[test]
    fn test_drag_vector_out_of_range() {
        let mut scene = Scene3::default();
        assert_eq!(
            scene.drag_vector(7, Vec3F64::X),
            Err(SceneError::VectorIndexOutOfRange(7, 3))
        );
    }

    #[test]
    fn test_transpose_and_reset() -> Result<(), SceneError> {
        let mut scene = Scene3::default();
        scene.apply_preset("3D Shear (XY)")?;
        scene.transpose_matrix();
        assert_eq!(scene.matrix.entry(2, 0), 1.0);
        assert_eq!(scene.matrix.entry(0, 2), 0.0);

        scene.vectors[1].vector = Vec3F64::new(5.0, 5.0, 5.0);
        scene.reset_vector(1)?;
        assert_eq!(scene.vectors[1].vector, Vec3F64::Y);

        scene.reset_matrix();
        assert_eq!(scene.matrix, Mat3F64::IDENTITY);

        scene.scalar = -3.0;
        scene.reset_all();
        assert_eq!(scene, Scene3::default());
        Ok(())
    }

    #[test]
    fn test_reset_vector_added_vector() {
        let mut scene = Scene2::default();
        scene
            .vectors
            .push(LabeledVector::new(Vec2F64::new(2.0, 3.0), "w", Color::rgb(255, 255, 255)));
        assert_eq!(
            scene.reset_vector(3),
            Err(SceneError::VectorIndexOutOfRange(3, 4))
        );
    }

    #[test]
    fn test_unknown_preset() {
        let mut scene = Scene2::default();
        assert_eq!(
            scene.apply_preset("Rotate 17°"),
            Err(SceneError::UnknownPreset("Rotate 17°".to_string()))
        );
        assert_eq!(scene.matrix, Mat2F64::IDENTITY);
    }

    #[test]
    fn test_scene_analysis() {
        let mut scene = Scene2::default();
        scene.apply_preset("Rotate 90°").unwrap();
        assert!(!scene.analyze().has_real_eigenvalues());
        scene.scalar = 0.0;
        assert_eq!(scene.effective_matrix(), Mat2F64::ZERO);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_scene2_serde_round_trip() -> Result<(), serde_json::Error> {
        let mut scene = Scene2::default();
        scene.matrix = Mat2F64::from_rows([[1.0, 2.0], [-0.5, 3.25]]);
        scene.scalar = -1.5;

        let json = serde_json::to_string(&scene)?;
        assert!(json.contains("\"color\":\"#60a5fa\""));
        assert_eq!(serde_json::from_str::<Scene2>(&json)?, scene);
        Ok(())
    }

    #[test]
    fn test_scene3_serde_round_trip() -> Result<(), serde_json::Error> {
        let mut scene = Scene3::default();
        scene.matrix = Mat3F64::from_rows([[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]]);
        scene
            .vectors
            .push(LabeledVector::new(Vec3F64::new(0.5, -1.0, 2.0), "w", Color::rgb(1, 2, 3)));

        let json = serde_json::to_string(&scene)?;
        assert_eq!(serde_json::from_str::<Scene3>(&json)?, scene);
        Ok(())
    }
}
