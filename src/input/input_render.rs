//! Search field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::input::SearchField;
use crate::surface::TextSurface;

/// Render the search field into `area`
pub fn render_field(field: &mut SearchField, enabled: bool, frame: &mut Frame, area: Rect) {
    let border_color = if field.has_focus() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut title_spans = vec![Span::raw(" Search ")];
    if !enabled {
        title_spans.push(Span::styled(
            "[suggestions paused] ",
            Style::default().fg(Color::Yellow),
        ));
    }

    field.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title_spans))
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(&field.textarea, area);
}
