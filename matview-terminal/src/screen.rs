/// Terminal text surface addressed in pixel coordinates
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use matview_core::{ScreenConfig, TextSink};
use std::io::Write;

/// A line placed on the character grid
#[derive(Debug, Clone, PartialEq)]
struct PlacedLine {
    column: u16,
    row: u16,
    text: String,
}

/// Collects one frame of text and draws it with crossterm.
///
/// Pixel positions are mapped to character cells using the configured
/// cell size. Lines that fall outside the grid are dropped.
pub struct ScreenText {
    cell_width: u32,
    cell_height: u32,
    lines: Vec<PlacedLine>,
}

impl ScreenText {
    pub fn new(screen: &ScreenConfig) -> Self {
        Self {
            cell_width: screen.cell_width.max(1),
            cell_height: screen.cell_height.max(1),
            lines: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Character cell holding pixel `(x, y)`
    pub fn cell_at(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let column = u32::try_from(x).ok()? / self.cell_width;
        let row = u32::try_from(y).ok()? / self.cell_height;
        Some((u16::try_from(column).ok()?, u16::try_from(row).ok()?))
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(Clear(ClearType::All))?;
        writer.queue(SetForegroundColor(Color::White))?;
        for line in &self.lines {
            writer.queue(cursor::MoveTo(line.column, line.row))?;
            writer.queue(Print(&line.text))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl TextSink for ScreenText {
    fn print_at(&mut self, x: i32, y: i32, text: &str) {
        match self.cell_at(x, y) {
            Some((column, row)) => self.lines.push(PlacedLine {
                column,
                row,
                text: text.to_string(),
            }),
            None => log::trace!("dropping off-screen text at ({}, {})", x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matview_core::{print_showcase, ShowcaseConfig};

    #[test]
    fn test_pixel_to_cell_mapping() {
        let screen = ScreenText::new(&ScreenConfig::default());
        assert_eq!(screen.cell_at(0, 0), Some((0, 0)));
        assert_eq!(screen.cell_at(16, 100), Some((2, 5)));
        assert_eq!(screen.cell_at(7, 19), Some((0, 0)));
        assert_eq!(screen.cell_at(-1, 0), None);
        assert_eq!(screen.cell_at(0, i32::MAX), None);
    }

    #[test]
    fn test_off_screen_text_dropped() {
        let mut screen = ScreenText::new(&ScreenConfig::default());
        screen.print_at(-8, 0, "hidden");
        screen.print_at(0, -20, "hidden");
        assert!(screen.is_empty());
    }

    #[test]
    fn test_showcase_rows_are_contiguous() {
        let mut screen = ScreenText::new(&ScreenConfig::default());
        print_showcase(&mut screen, &ShowcaseConfig::default());

        assert_eq!(screen.len(), 15);
        for (row, line) in screen.lines.iter().enumerate() {
            assert_eq!(line.row as usize, row);
            assert_eq!(line.column, 0);
        }
    }

    #[test]
    fn test_draw_writes_text() {
        let mut screen = ScreenText::new(&ScreenConfig::default());
        screen.print_at(0, 0, "viewportMatrix");
        screen.print_at(0, 20, "300.00  0.00  0.00  0.00");

        let mut out: Vec<u8> = Vec::new();
        screen.draw(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("viewportMatrix"));
        assert!(text.contains("300.00  0.00  0.00  0.00"));

        screen.clear();
        assert!(screen.is_empty());
    }
}
