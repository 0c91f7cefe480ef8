use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, ResultEntry};
use crate::input::input_render;
use crate::layout;
use crate::popup::popup_render;
use crate::suggestion::icon_for_kind;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let regions = layout::split(frame.area());

        if self.autocomplete.field_mut().set_area(regions.search) {
            self.autocomplete.adjust_position();
        }

        let enabled = self.autocomplete.is_enabled();
        input_render::render_field(self.autocomplete.field_mut(), enabled, frame, regions.search);
        self.render_results(frame, regions.results);
        self.render_status(frame, regions.status);

        // Popup last so it draws over the results
        popup_render::render_popup(self.autocomplete.popup_mut(), frame);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let skip = self.results.len().saturating_sub(visible);

        let lines: Vec<Line> = self
            .results
            .iter()
            .skip(skip)
            .map(|entry| match entry {
                ResultEntry::Searched(query) => Line::from(vec![
                    Span::styled("search  ", Style::default().fg(Color::DarkGray)),
                    Span::raw(query.clone()),
                ]),
                ResultEntry::Opened(suggestion) => {
                    let icon = icon_for_kind(&suggestion.kind).unwrap_or(" ");
                    let mut spans = vec![
                        Span::styled(format!("open {}  ", icon), Style::default().fg(Color::Green)),
                        Span::raw(suggestion.value.clone()),
                    ];
                    if !suggestion.kind.is_empty() {
                        spans.push(Span::styled(
                            format!("  [{}]", suggestion.kind),
                            Style::default().fg(Color::Magenta),
                        ));
                    }
                    Line::from(spans)
                }
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Results ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " Enter accept  ↑↓ select  Esc close  Ctrl+P pause  Ctrl+C quit ",
            Style::default().fg(Color::DarkGray),
        )];
        if self.catalog_size > 0 {
            spans.push(Span::styled(
                format!(" {} entries ", self.catalog_size),
                Style::default().fg(Color::Cyan),
            ));
        }
        if let Some(accepted) = &self.last_accepted {
            spans.push(Span::styled(
                format!(" last: {} ", accepted),
                Style::default().fg(Color::Green),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
