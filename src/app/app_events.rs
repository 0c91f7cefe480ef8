//! Terminal event routing
//!
//! While the popup is open it sees keys first, the way a popup window holds
//! input focus on the field's behalf; keys it does not want come back to be
//! typed into the field.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::app_state::App;
use crate::layout;
use crate::popup::PopupHit;
use crate::popup::machine::{Disposition, NavKey, PopupEvent};
use crate::surface::TextSurface;

/// Map a terminal key to the keys the popup distinguishes
pub fn nav_key(key: &KeyEvent) -> NavKey {
    match key.code {
        KeyCode::Enter => NavKey::Enter,
        KeyCode::Esc => NavKey::Escape,
        KeyCode::Up => NavKey::Up,
        KeyCode::Down => NavKey::Down,
        KeyCode::Home => NavKey::Home,
        KeyCode::End => NavKey::End,
        KeyCode::PageUp => NavKey::PageUp,
        KeyCode::PageDown => NavKey::PageDown,
        _ => NavKey::Other,
    }
}

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Only process key press events (avoid duplicates)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::FocusLost => {
                self.autocomplete.handle_event(PopupEvent::FocusLost);
                self.autocomplete.field_mut().set_focused(false);
            }
            Event::FocusGained => self.autocomplete.field_mut().set_focused(true),
            Event::Resize(width, height) => self.relayout(Rect::new(0, 0, width, height)),
            _ => {}
        }
        self.collect_notifications();
    }

    /// Recompute where the field sits and keep the popup attached to it
    pub fn relayout(&mut self, area: Rect) {
        let search = layout::split(area).search;
        if self.autocomplete.field_mut().set_area(search) {
            self.autocomplete.handle_event(PopupEvent::HostGeometryChanged);
        }
    }

    pub(super) fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('p') => {
                    self.toggle_suggestions();
                    return;
                }
                _ => {}
            }
        }

        if self.autocomplete.is_visible() {
            if self.autocomplete.handle_event(PopupEvent::Key(nav_key(&key)))
                == Disposition::ForwardToField
            {
                self.field_key(key, now);
            }
            return;
        }

        match key.code {
            KeyCode::Esc if self.query().is_empty() => self.should_quit = true,
            KeyCode::Esc => self.autocomplete.field_mut().set_text(""),
            _ => self.field_key(key, now),
        }
    }

    /// Deliver a key to the search field
    fn field_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Enter {
            self.submit_search();
            return;
        }
        if self.autocomplete.field_mut().input(key) {
            self.autocomplete.text_edited(now);
        }
    }

    pub(super) fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let hit = self
            .autocomplete
            .popup()
            .hit_test(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => match hit {
                PopupHit::Row(row) => {
                    self.pointer_in_popup = true;
                    self.autocomplete.handle_event(PopupEvent::Hover(Some(row)));
                }
                PopupHit::Frame => {
                    self.pointer_in_popup = true;
                    self.autocomplete.handle_event(PopupEvent::Hover(None));
                }
                PopupHit::Outside if self.pointer_in_popup => {
                    self.pointer_in_popup = false;
                    self.autocomplete.handle_event(PopupEvent::PointerLeft);
                }
                PopupHit::Outside => {}
            },
            MouseEventKind::Down(MouseButton::Left) => match hit {
                PopupHit::Row(row) => {
                    self.autocomplete.handle_event(PopupEvent::Click(row));
                }
                PopupHit::Frame => {}
                PopupHit::Outside => {
                    self.autocomplete.handle_event(PopupEvent::PressOutside);
                }
            },
            _ => {}
        }

        if !self.autocomplete.is_visible() {
            self.pointer_in_popup = false;
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
