//! Named example transformations.

use linlab_algebra::{Mat2F64, Mat3F64};

/// A named matrix given in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset<const N: usize> {
    /// Display name.
    pub name: &'static str,
    /// Matrix rows.
    pub rows: [[f64; N]; N],
}

impl Preset<2> {
    /// The preset as a matrix.
    pub fn matrix(&self) -> Mat2F64 {
        Mat2F64::from_rows(self.rows)
    }
}

impl Preset<3> {
    /// The preset as a matrix.
    pub fn matrix(&self) -> Mat3F64 {
        Mat3F64::from_rows(self.rows)
    }
}

const fn preset<const N: usize>(name: &'static str, rows: [[f64; N]; N]) -> Preset<N> {
    Preset { name, rows }
}

/// 2x2 presets in display order.
pub const PRESETS_2D: &[Preset<2>] = &[
    preset("Identity (E)", [[1.0, 0.0], [0.0, 1.0]]),
    preset("Scale (2x)", [[2.0, 0.0], [0.0, 2.0]]),
    preset("Scale (0.5x)", [[0.5, 0.0], [0.0, 0.5]]),
    preset("Stretch X", [[2.0, 0.0], [0.0, 1.0]]),
    preset("Stretch Y", [[1.0, 0.0], [0.0, 2.0]]),
    preset("Rotate 30°", [[0.87, -0.5], [0.5, 0.87]]),
    preset("Rotate 45°", [[0.71, -0.71], [0.71, 0.71]]),
    preset("Rotate 90°", [[0.0, -1.0], [1.0, 0.0]]),
    preset("Rotate 180°", [[-1.0, 0.0], [0.0, -1.0]]),
    preset("X-Shear (1)", [[1.0, 1.0], [0.0, 1.0]]),
    preset("Y-Shear (1)", [[1.0, 0.0], [1.0, 1.0]]),
    preset("Reflect X-axis", [[1.0, 0.0], [0.0, -1.0]]),
    preset("Reflect Y-axis", [[-1.0, 0.0], [0.0, 1.0]]),
    preset("Reflect y=x", [[0.0, 1.0], [1.0, 0.0]]),
    preset("Reflect y=-x", [[0.0, -1.0], [-1.0, 0.0]]),
    preset("Project onto X", [[1.0, 0.0], [0.0, 0.0]]),
    preset("Project onto Y", [[0.0, 0.0], [0.0, 1.0]]),
    preset("Project onto y=x", [[0.5, 0.5], [0.5, 0.5]]),
    preset("Permutation", [[0.0, 1.0], [1.0, 0.0]]),
    preset("Zero Matrix", [[0.0, 0.0], [0.0, 0.0]]),
    preset("Singular (Rank 1)", [[1.0, 1.0], [1.0, 1.0]]),
];

/// 3x3 presets in display order.
pub const PRESETS_3D: &[Preset<3>] = &[
    preset("Identity (E)", [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
    preset("Scale (2x)", [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]),
    preset("Scale (0.5x)", [[0.5, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 0.5]]),
    preset("Rotate X (90°)", [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]]),
    preset("Rotate Y (90°)", [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]]),
    preset("Rotate Z (90°)", [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
    preset("Rotate X (45°)", [[1.0, 0.0, 0.0], [0.0, 0.71, -0.71], [0.0, 0.71, 0.71]]),
    preset("Rotate Y (45°)", [[0.71, 0.0, 0.71], [0.0, 1.0, 0.0], [-0.71, 0.0, 0.71]]),
    preset("Rotate Z (45°)", [[0.71, -0.71, 0.0], [0.71, 0.71, 0.0], [0.0, 0.0, 1.0]]),
    preset("Project XY Plane", [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]),
    preset("Project YZ Plane", [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
    preset("Project XZ Plane", [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
    preset("Reflect XY Plane", [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]]),
    preset("Reflect YZ Plane", [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
    preset("Reflect XZ Plane", [[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]),
    preset("Flatten to X-axis", [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]),
    preset("Flatten to Y-axis", [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]),
    preset("Flatten to Z-axis", [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
    preset("X-Y Swap", [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
    preset("Permute (XYZ->ZXY)", [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]),
    preset("3D Shear (XY)", [[1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
    preset("Zero Space", [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]),
];

/// Look up a 2x2 preset by name.
pub fn preset_2d(name: &str) -> Option<Mat2F64> {
    PRESETS_2D.iter().find(|p| p.name == name).map(|p| p.matrix())
}

/// Look up a 3x3 preset by name.
pub fn preset_3d(name: &str) -> Option<Mat3F64> {
    PRESETS_3D.iter().find(|p| p.name == name).map(|p| p.matrix())
}
