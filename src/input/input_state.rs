use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::surface::TextSurface;

/// Single-line search field backed by a `TextArea`
pub struct SearchField {
    pub textarea: TextArea<'static>,
    focused: bool,
    area: Rect,
}

impl SearchField {
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(""),
            focused: true,
            area: Rect::default(),
        }
    }

    /// Feed a key to the text editor; returns true when the text changed
    ///
    /// Keys that would insert a line break are swallowed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => false,
            KeyCode::Char('m') | KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                false
            }
            _ => self.textarea.input(key),
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Record where the field is drawn; returns true when it moved or resized
    pub fn set_area(&mut self, area: Rect) -> bool {
        let changed = self.area != area;
        self.area = area;
        changed
    }
}

impl Default for SearchField {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface for SearchField {
    fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    fn set_text(&mut self, text: &str) {
        self.textarea = new_textarea(text);
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    /// Visible once laid out with a non-empty area
    fn is_visible(&self) -> bool {
        !self.area.is_empty()
    }

    fn request_focus(&mut self) {
        self.focused = true;
    }

    fn bounds(&self) -> Rect {
        self.area
    }
}

/// Fresh editor holding `text` with the cursor at the end
fn new_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Search channels, videos, playlists");
    textarea.move_cursor(CursorMove::End);
    textarea
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
