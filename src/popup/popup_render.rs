//! Suggestion popup rendering

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::popup::PopupList;
use crate::surface::{ListSurface, PopupRow};
use crate::widgets::popup;

const ICON_COLUMN_WIDTH: usize = 2;

/// Render the popup over whatever is below it
///
/// The popup is clipped to the screen and the drawn area is recorded for
/// mouse hit testing.
pub fn render_popup(list: &mut PopupList, frame: &mut Frame) {
    if !list.is_visible() || list.row_count() == 0 {
        list.set_rendered_area(Default::default());
        return;
    }

    let area = popup::clamp_to(list.bounds(), frame.area());
    list.set_rendered_area(area);
    if area.width < 3 || area.height < 3 {
        return;
    }

    let text_width = (area.width as usize).saturating_sub(2 + 2 + ICON_COLUMN_WIDTH);
    let highlighted = list.highlighted();

    let items: Vec<ListItem> = list
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = highlighted == Some(i);
            row_item(row, selected, text_width, list.row_height())
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);

    let list_widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list_widget, area);
}

fn row_item(row: &PopupRow, selected: bool, text_width: usize, row_height: u16) -> ListItem<'static> {
    let icon = row.icon.unwrap_or(" ");
    let text = truncate_to_width(&row.text, text_width);

    let line = if selected {
        Line::from(vec![
            Span::styled(
                format!("► {} ", icon),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(
                text,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("  {} ", icon), Style::default().fg(Color::Magenta)),
            Span::styled(text, Style::default().fg(Color::White)),
        ])
    };

    let mut lines = vec![line];
    lines.extend((1..row_height).map(|_| Line::default()));
    ListItem::new(Text::from(lines))
}

/// Cut `text` to at most `max_width` display columns, marking the cut with "…"
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width - 1 {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "popup_render_tests.rs"]
mod popup_render_tests;
