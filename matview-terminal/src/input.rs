/// Per-frame keyboard snapshots with key-down edge detection
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

/// Number of key codes tracked per snapshot
pub const KEY_COUNT: usize = 256;

/// Key code of the escape key
pub const KEY_ESCAPE: usize = 0x01;

/// Key code for a crossterm key, if it is one we track.
///
/// Escape has its own code; printable ASCII keys use their code point.
pub fn key_index(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Esc => Some(KEY_ESCAPE),
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => Some(c as usize),
        _ => None,
    }
}

/// The keys seen this frame and the frame before it
pub struct KeyboardState {
    keys: [bool; KEY_COUNT],
    pre_keys: [bool; KEY_COUNT],
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            keys: [false; KEY_COUNT],
            pre_keys: [false; KEY_COUNT],
        }
    }

    /// Keep the current snapshot as the previous one and start a new one.
    pub fn begin_frame(&mut self) {
        self.pre_keys = self.keys;
        self.keys = [false; KEY_COUNT];
    }

    /// Record a terminal event into the current snapshot.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(KeyEvent { code, kind, .. }) = event {
            if matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                if let Some(index) = key_index(*code) {
                    self.keys[index] = true;
                }
            }
        }
    }

    pub fn is_pressed(&self, key: usize) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// True when `key` went from up last frame to down this frame.
    pub fn is_triggered(&self, key: usize) -> bool {
        let was_down = self.pre_keys.get(key).copied().unwrap_or(false);
        !was_down && self.is_pressed(key)
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}
