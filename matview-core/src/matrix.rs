/// Row-major 4x4 matrix value type
use nalgebra::{Matrix4, Point3};
use std::ops::Mul;

/// A 4x4 grid of `f32` entries addressed as `m[row][column]`.
///
/// Matrices follow the row-vector convention: a point is the row
/// `(x, y, z, 1)` multiplied on the left, so translation lives in row 3.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Matrix4x4 {
    pub fn zero() -> Self {
        Self { m: [[0.0; 4]; 4] }
    }

    pub fn identity() -> Self {
        let mut matrix = Self::zero();
        for i in 0..4 {
            matrix.m[i][i] = 1.0;
        }
        matrix
    }

    pub fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    pub fn row(&self, row: usize) -> &[f32; 4] {
        &self.m[row]
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zero();
        for row in 0..4 {
            for col in 0..4 {
                out.m[col][row] = self.m[row][col];
            }
        }
        out
    }

    /// Transform a point, dividing by the resulting w.
    ///
    /// Returns `None` when w comes out as zero.
    pub fn transform_point(&self, point: &Point3<f32>) -> Option<Point3<f32>> {
        let column_major: Matrix4<f32> = (*self).into();
        Point3::from_homogeneous(column_major * point.to_homogeneous())
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    /// `a * b` applies `a` first, then `b`.
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut out = Matrix4x4::zero();
        for row in 0..4 {
            for col in 0..4 {
                out.m[row][col] = (0..4).map(|k| self.m[row][k] * rhs.m[k][col]).sum();
            }
        }
        out
    }
}

/// Converts into nalgebra's column-vector convention (the transpose).
impl From<Matrix4x4> for Matrix4<f32> {
    fn from(matrix: Matrix4x4) -> Self {
        // Each of our rows becomes an nalgebra column.
        Matrix4::from_fn(|row, col| matrix.m[col][row])
    }
}

impl From<Matrix4<f32>> for Matrix4x4 {
    fn from(matrix: Matrix4<f32>) -> Self {
        let mut out = Matrix4x4::zero();
        for row in 0..4 {
            for col in 0..4 {
                out.m[row][col] = matrix[(col, row)];
            }
        }
        out
    }
}
