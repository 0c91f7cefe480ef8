//! Terminal popup list
//!
//! Implements `ListSurface` in terminal cells: the frame is a one-cell
//! border and the "font" is one cell tall.

use ratatui::layout::Rect;

use crate::surface::{ListSurface, PopupRow};
use crate::widgets::popup;

const FRAME_WIDTH: u16 = 1;
const CELL_HEIGHT: f32 = 1.0;

/// What lies under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupHit {
    Outside,
    Frame,
    Row(usize),
}

#[derive(Debug, Clone, Default)]
pub struct PopupList {
    rows: Vec<PopupRow>,
    row_height: u16,
    highlighted: Option<usize>,
    visible: bool,
    area: Rect,
    /// Area actually drawn on the last frame, clipped to the screen
    rendered: Rect,
}

impl PopupList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[PopupRow] {
        &self.rows
    }

    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    pub fn rendered_area(&self) -> Rect {
        self.rendered
    }

    pub fn set_rendered_area(&mut self, area: Rect) {
        self.rendered = area;
    }

    /// Locate a screen cell relative to the drawn popup
    pub fn hit_test(&self, column: u16, row: u16) -> PopupHit {
        if !self.visible || !popup::contains(self.rendered, column, row) {
            return PopupHit::Outside;
        }

        let inner = popup::inset_rect(self.rendered, FRAME_WIDTH, FRAME_WIDTH);
        if !popup::contains(inner, column, row) || self.row_height == 0 {
            return PopupHit::Frame;
        }

        let index = ((row - inner.y) / self.row_height) as usize;
        if index < self.rows.len() {
            PopupHit::Row(index)
        } else {
            PopupHit::Frame
        }
    }
}

impl ListSurface for PopupList {
    fn set_rows(&mut self, rows: Vec<PopupRow>, row_height: u16) {
        self.rows = rows;
        self.row_height = row_height;
        self.highlighted = None;
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.highlighted = None;
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_height_hint(&self, row: usize) -> u16 {
        if row < self.rows.len() {
            self.row_height
        } else {
            0
        }
    }

    fn frame_width(&self) -> u16 {
        FRAME_WIDTH
    }

    fn font_pixel_size(&self) -> f32 {
        CELL_HEIGHT
    }

    fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    fn set_highlighted(&mut self, row: Option<usize>) {
        self.highlighted = row.filter(|r| *r < self.rows.len());
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.rendered = Rect::default();
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.area.width = width;
        self.area.height = height;
    }

    fn move_to(&mut self, x: u16, y: u16) {
        self.area.x = x;
        self.area.y = y;
    }

    fn bounds(&self) -> Rect {
        self.area
    }
}

#[cfg(test)]
#[path = "popup_state_tests.rs"]
mod popup_state_tests;
