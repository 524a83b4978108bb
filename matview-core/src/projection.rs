/// Perspective and orthographic projection matrices
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix4x4;

/// Right-handed perspective projection into clip space.
///
/// `fov_y` is the vertical field of view in radians. Degenerate inputs
/// (`far_clip == near_clip`, `fov_y` of 0 or PI) produce infinities or NaN.
pub fn perspective_fov_matrix(
    fov_y: f32,
    aspect_ratio: f32,
    near_clip: f32,
    far_clip: f32,
) -> Matrix4x4 {
    let mut matrix = Matrix4x4::zero();
    let tan_half_fov_y = (fov_y / 2.0).tan();

    matrix.m[0][0] = 1.0 / (aspect_ratio * tan_half_fov_y);
    matrix.m[1][1] = 1.0 / tan_half_fov_y;
    matrix.m[2][2] = -(far_clip + near_clip) / (far_clip - near_clip);
    matrix.m[2][3] = -1.0;
    matrix.m[3][2] = -(2.0 * far_clip * near_clip) / (far_clip - near_clip);

    matrix
}

/// Maps the box `[left, right] x [bottom, top] x [near, far]` linearly
/// into clip space.
pub fn orthographic_matrix(
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    near_clip: f32,
    far_clip: f32,
) -> Matrix4x4 {
    let mut matrix = Matrix4x4::zero();

    matrix.m[0][0] = 2.0 / (right - left);
    matrix.m[1][1] = 2.0 / (top - bottom);
    matrix.m[2][2] = -2.0 / (far_clip - near_clip);
    matrix.m[3][0] = -(right + left) / (right - left);
    matrix.m[3][1] = -(top + bottom) / (top - bottom);
    matrix.m[3][2] = -(far_clip + near_clip) / (far_clip - near_clip);
    matrix.m[3][3] = 1.0;

    matrix
}

/// Arguments for [`perspective_fov_matrix`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerspectiveParams {
    pub fov_y: f32,
    pub aspect_ratio: f32,
    pub near_clip: f32,
    pub far_clip: f32,
}

impl PerspectiveParams {
    pub fn matrix(&self) -> Matrix4x4 {
        perspective_fov_matrix(self.fov_y, self.aspect_ratio, self.near_clip, self.far_clip)
    }
}

impl Default for PerspectiveParams {
    fn default() -> Self {
        Self {
            fov_y: 0.63,
            aspect_ratio: 1.33,
            near_clip: 0.1,
            far_clip: 1000.0,
        }
    }
}

/// Arguments for [`orthographic_matrix`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrthographicParams {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub near_clip: f32,
    pub far_clip: f32,
}

impl OrthographicParams {
    pub fn matrix(&self) -> Matrix4x4 {
        orthographic_matrix(
            self.left,
            self.top,
            self.right,
            self.bottom,
            self.near_clip,
            self.far_clip,
        )
    }
}

impl Default for OrthographicParams {
    fn default() -> Self {
        Self {
            left: -160.0,
            top: 160.0,
            right: 200.0,
            bottom: 300.0,
            near_clip: 0.0,
            far_clip: 1000.0,
        }
    }
}
