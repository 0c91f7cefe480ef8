use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a `width` x `height` popup directly below `anchor`
pub fn popup_below_anchor(anchor: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: anchor.x,
        y: anchor.y.saturating_add(anchor.height),
        width,
        height,
    }
}

/// Clip `area` so that it fits inside `bounds`
///
/// The origin is kept; only width and height shrink. An area that starts
/// outside `bounds` collapses to zero size.
pub fn clamp_to(area: Rect, bounds: Rect) -> Rect {
    let right = bounds.x.saturating_add(bounds.width);
    let bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: area.x,
        y: area.y,
        width: area.width.min(right.saturating_sub(area.x)),
        height: area.height.min(bottom.saturating_sub(area.y)),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
