/// Viewport transformation from normalized device coordinates to pixels
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix4x4;

/// Maps NDC onto a screen rectangle whose y axis grows downward.
///
/// Depth is remapped from `[0, 1]` onto `[min_depth, max_depth]`.
pub fn viewport_matrix(
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    min_depth: f32,
    max_depth: f32,
) -> Matrix4x4 {
    let mut matrix = Matrix4x4::zero();

    matrix.m[0][0] = width / 2.0;
    matrix.m[1][1] = -height / 2.0;
    matrix.m[2][2] = max_depth - min_depth;
    matrix.m[3][0] = left + width / 2.0;
    matrix.m[3][1] = top + height / 2.0;
    matrix.m[3][2] = min_depth;
    matrix.m[3][3] = 1.0;

    matrix
}

/// Arguments for [`viewport_matrix`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportParams {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl ViewportParams {
    pub fn matrix(&self) -> Matrix4x4 {
        viewport_matrix(
            self.left,
            self.top,
            self.width,
            self.height,
            self.min_depth,
            self.max_depth,
        )
    }
}

impl Default for ViewportParams {
    fn default() -> Self {
        Self {
            left: 100.0,
            top: 200.0,
            width: 600.0,
            height: 300.0,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}
