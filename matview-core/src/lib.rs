/// Matview Core Library - Transform matrix construction and display
///
/// This library provides the stateless core: the perspective, orthographic
/// and viewport matrix builders, plus text output of their contents.

pub mod config;
pub mod matrix;
pub mod print;
pub mod projection;
pub mod showcase;
pub mod transform;

// Re-export commonly used types
pub use config::{ConfigError, ScreenConfig, ShowcaseConfig};
pub use matrix::Matrix4x4;
pub use nalgebra::Point3;
pub use print::{format_row, matrix_screen_print, TextLine, TextSink, ROW_HEIGHT};
pub use projection::{orthographic_matrix, perspective_fov_matrix, OrthographicParams, PerspectiveParams};
pub use showcase::{print_showcase, showcase_matrices};
pub use transform::{viewport_matrix, ViewportParams};
