/// The three labelled matrices drawn every frame
use crate::config::ShowcaseConfig;
use crate::matrix::Matrix4x4;
use crate::print::{matrix_screen_print, TextSink, ROW_HEIGHT};

pub const ORTHOGRAPHIC_LABEL: &str = "orthographicMatrix";
pub const PERSPECTIVE_LABEL: &str = "perspectiveFovMatrix";
pub const VIEWPORT_LABEL: &str = "viewportMatrix";

/// Build the orthographic, perspective and viewport matrices in draw order.
pub fn showcase_matrices(config: &ShowcaseConfig) -> [(&'static str, Matrix4x4); 3] {
    [
        (ORTHOGRAPHIC_LABEL, config.orthographic.matrix()),
        (PERSPECTIVE_LABEL, config.perspective.matrix()),
        (VIEWPORT_LABEL, config.viewport.matrix()),
    ]
}

/// Print every showcase matrix, stacked vertically from the top-left corner.
pub fn print_showcase<S: TextSink + ?Sized>(sink: &mut S, config: &ShowcaseConfig) {
    let block_height = config.block_spacing.saturating_mul(ROW_HEIGHT);
    for (index, (label, matrix)) in (0..).zip(showcase_matrices(config).iter()) {
        let y = block_height.saturating_mul(index);
        matrix_screen_print(sink, 0, y, matrix, label);
    }
}
