/// Screen text output for matrices
use crate::matrix::Matrix4x4;

/// Vertical distance in pixels between printed lines.
pub const ROW_HEIGHT: i32 = 20;

/// Something that can put one line of text at a pixel position.
pub trait TextSink {
    fn print_at(&mut self, x: i32, y: i32, text: &str);
}

/// A captured line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

impl TextSink for Vec<TextLine> {
    fn print_at(&mut self, x: i32, y: i32, text: &str) {
        self.push(TextLine {
            x,
            y,
            text: text.to_string(),
        });
    }
}

/// Format one matrix row with two decimals per entry.
pub fn format_row(row: &[f32; 4]) -> String {
    format!("{:.2}  {:.2}  {:.2}  {:.2}", row[0], row[1], row[2], row[3])
}

/// Print `label` at `(x, y)` followed by the four matrix rows below it.
pub fn matrix_screen_print<S: TextSink + ?Sized>(
    sink: &mut S,
    x: i32,
    y: i32,
    matrix: &Matrix4x4,
    label: &str,
) {
    sink.print_at(x, y, label);
    for (offset, row) in (1..).zip(0..4) {
        let row_y = y.saturating_add(offset * ROW_HEIGHT);
        sink.print_at(x, row_y, &format_row(matrix.row(row)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::viewport_matrix;

    #[test]
    fn test_format_row_two_decimals() {
        assert_eq!(format_row(&[1.0, -0.5, 2.345, 1000.0]), "1.00  -0.50  2.35  1000.00");
        assert_eq!(format_row(&[0.0; 4]), "0.00  0.00  0.00  0.00");
    }

    #[test]
    fn test_matrix_print_emits_five_lines() {
        let mut lines: Vec<TextLine> = Vec::new();
        let matrix = viewport_matrix(100.0, 200.0, 600.0, 300.0, 0.0, 1.0);
        matrix_screen_print(&mut lines, 10, 40, &matrix, "viewportMatrix");

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].text, "viewportMatrix");
        assert_eq!(lines[1].text, "300.00  0.00  0.00  0.00");
        assert_eq!(lines[2].text, "0.00  -150.00  0.00  0.00");
        assert_eq!(lines[3].text, "0.00  0.00  1.00  0.00");
        assert_eq!(lines[4].text, "400.00  350.00  0.00  1.00");

        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.x, 10);
            assert_eq!(line.y, 40 + i as i32 * ROW_HEIGHT);
        }
    }

    #[test]
    fn test_print_near_bottom_edge() {
        let mut lines: Vec<TextLine> = Vec::new();
        matrix_screen_print(&mut lines, 0, i32::MAX - 10, &Matrix4x4::zero(), "m");

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].y, i32::MAX - 10);
        assert!(lines[1..].iter().all(|line| line.y == i32::MAX));
        assert_eq!(lines[4].text, "0.00  0.00  0.00  0.00");
    }

    #[test]
    fn test_every_entry_has_two_decimals() {
        let mut lines: Vec<TextLine> = Vec::new();
        let matrix = Matrix4x4::from_rows([
            [0.123, 4.0, -5.5, 6.789],
            [1.0, 2.0, 3.0, 4.0],
            [-0.001, 0.0, 10.0, 99.999],
            [7.0, 8.0, 9.0, 10.0],
        ]);
        matrix_screen_print(&mut lines, 0, 0, &matrix, "m");

        for line in &lines[1..] {
            let entries: Vec<&str> = line.text.split_whitespace().collect();
            assert_eq!(entries.len(), 4);
            for entry in entries {
                let (_, decimals) = entry.split_once('.').unwrap();
                assert_eq!(decimals.len(), 2, "{}", entry);
            }
        }
    }

    #[test]
    fn test_print_does_not_modify_matrix() {
        let matrix = Matrix4x4::identity();
        let copy = matrix;
        let mut lines: Vec<TextLine> = Vec::new();
        matrix_screen_print(&mut lines, 0, 0, &matrix, "identity");
        assert_eq!(matrix, copy);
    }
}
