//! Capability interfaces the autocomplete controller drives
//!
//! The controller never touches concrete widgets. A host provides a text
//! surface (the search field, called the "buddy") and a selectable list
//! surface (the popup). The terminal front-end implements both in
//! `input::SearchField` and `popup::PopupList`; tests use in-memory fakes.

use ratatui::layout::Rect;

use crate::suggestion::Suggestion;

/// One rendered popup row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupRow {
    pub text: String,
    pub icon: Option<&'static str>,
}

impl From<&Suggestion> for PopupRow {
    fn from(suggestion: &Suggestion) -> Self {
        Self {
            text: suggestion.value.clone(),
            icon: suggestion.icon(),
        }
    }
}

/// The text field the popup is attached to
pub trait TextSurface {
    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    fn has_focus(&self) -> bool;

    fn is_visible(&self) -> bool;

    /// Move keyboard focus back to the field
    fn request_focus(&mut self);

    /// Screen area occupied by the field
    fn bounds(&self) -> Rect;
}

/// A transient list that can show rows and track one highlighted row
pub trait ListSurface {
    /// Replace all rows; every row gets the same height
    fn set_rows(&mut self, rows: Vec<PopupRow>, row_height: u16);

    /// Drop all rows and the highlight
    fn clear(&mut self);

    fn row_count(&self) -> usize;

    /// Height the row wants, or 0 for an out-of-range row
    fn row_height_hint(&self, row: usize) -> u16;

    /// Thickness of the frame drawn around the rows
    fn frame_width(&self) -> u16;

    /// Pixel size of the list's font; row heights are a multiple of this
    fn font_pixel_size(&self) -> f32;

    fn highlighted(&self) -> Option<usize>;

    fn set_highlighted(&mut self, row: Option<usize>);

    fn show(&mut self);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;

    fn resize(&mut self, width: u16, height: u16);

    fn move_to(&mut self, x: u16, y: u16);

    fn bounds(&self) -> Rect;
}
