//! Screen layout: search field on top, results below, status line at the bottom

use ratatui::layout::{Constraint, Layout, Rect};

const SEARCH_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub search: Rect,
    pub results: Rect,
    pub status: Rect,
}

pub fn split(area: Rect) -> AppLayout {
    let [search, results, status] = Layout::vertical([
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    AppLayout {
        search,
        results,
        status,
    }
}
