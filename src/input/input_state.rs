use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::theme;

/// The single-line folder path field of the interactive mode
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(initial: &str) -> Self {
        let mut textarea = TextArea::new(vec![initial.to_string()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);
        textarea.move_cursor(CursorMove::End);

        Self { textarea }
    }

    /// Current folder text, trimmed
    pub fn folder(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|line| line.trim())
            .unwrap_or("")
    }

    /// Insert pasted text, keeping the field on one line
    pub fn insert_str(&mut self, text: &str) {
        let single_line: String = text.lines().collect::<Vec<_>>().join("");
        self.textarea.insert_str(single_line);
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new("")
    }
}
