//! Suggestion popup controller
//!
//! Sits between the search field, the suggestion provider and the popup
//! list. Edits restart a debounce timer; when it fires the field text is sent
//! to the provider, and the provider's reply fills the popup. Highlighting a
//! row previews its value in the field, accepting commits it, and every
//! cancellation path puts the original text back.

use std::time::Instant;

use crate::config::SuggestConfig;
use crate::debouncer::Debouncer;
use crate::popup::machine::{self, Disposition, Effect, PopupContext, PopupEvent, PopupPhase};
use crate::provider::{ProviderLink, ProviderReply};
use crate::suggestion::Suggestion;
use crate::surface::{ListSurface, PopupRow, TextSurface};
use crate::widgets::popup;

/// Timing and sizing knobs for the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutocompleteSettings {
    /// Quiet period after the last edit before a query is issued
    pub debounce_ms: u64,
    /// Delay after opening before hovering selects rows
    pub hover_delay_ms: u64,
    /// Row height as a multiple of the list font's pixel size
    pub row_height_factor: f32,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            hover_delay_ms: 100,
            row_height_factor: 1.0,
        }
    }
}

impl From<&SuggestConfig> for AutocompleteSettings {
    fn from(config: &SuggestConfig) -> Self {
        Self {
            debounce_ms: config.debounce_ms,
            hover_delay_ms: config.hover_delay_ms,
            row_height_factor: config.row_height_factor,
        }
    }
}

/// Emitted when a suggestion is committed, once per granularity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptNotification {
    Suggestion(Suggestion),
    Text(String),
}

/// Debounced suggestion popup attached to a text field
pub struct AutoComplete<F: TextSurface, L: ListSurface> {
    field: F,
    popup: L,
    enabled: bool,
    /// Field text before a suggestion was previewed; empty when nothing is pending
    original_text: String,
    suggestions: Vec<Suggestion>,
    phase: PopupPhase,
    hover_armed: bool,
    debounce: Debouncer,
    hover_settle: Debouncer,
    row_height_factor: f32,
    provider: Option<ProviderLink>,
    /// Generation of the most recent query; replies tagged otherwise are stale
    generation: u64,
    notifications: Vec<AcceptNotification>,
}

impl<F: TextSurface, L: ListSurface> AutoComplete<F, L> {
    pub fn new(field: F, popup: L, settings: AutocompleteSettings) -> Self {
        Self {
            field,
            popup,
            enabled: true,
            original_text: String::new(),
            suggestions: Vec::new(),
            phase: PopupPhase::Hidden,
            hover_armed: false,
            debounce: Debouncer::from_millis(settings.debounce_ms),
            hover_settle: Debouncer::from_millis(settings.hover_delay_ms),
            row_height_factor: settings.row_height_factor,
            provider: None,
            generation: 0,
            notifications: Vec::new(),
        }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn popup(&self) -> &L {
        &self.popup
    }

    pub fn popup_mut(&mut self) -> &mut L {
        &mut self.popup
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.phase.highlighted()
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// The live suggestion batch
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_hover_armed(&self) -> bool {
        self.hover_armed
    }

    pub fn is_query_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn has_suggester(&self) -> bool {
        self.provider.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Attach a provider, disconnecting from the previous one first
    pub fn set_suggester(&mut self, provider: ProviderLink) {
        if self.provider.take().is_some() {
            log::debug!("Disconnected previous suggestion provider");
        }
        self.provider = Some(provider);
    }

    /// The field's text was edited by the user
    pub fn text_edited(&mut self, now: Instant) {
        if self.enabled {
            self.debounce.schedule(now);
        }
    }

    /// Drive timers and deliver provider replies
    pub fn tick(&mut self, now: Instant) {
        if self.debounce.fire(now) {
            self.suggest();
        }
        if self.hover_settle.fire(now) {
            self.enable_item_hovering();
        }
        self.poll_provider(now);
    }

    /// Send the current field text to the provider
    pub fn suggest(&mut self) {
        if !self.enabled {
            return;
        }

        self.set_highlight(None);

        self.original_text = self.field.text();
        if self.original_text.is_empty() {
            self.supersede_query();
            self.hide_suggestions();
            return;
        }

        let Some(provider) = &self.provider else {
            return;
        };

        self.generation += 1;
        if let Err(e) = provider.request(&self.original_text, self.generation) {
            log::warn!("Dropping suggestion provider: {}", e);
            self.provider = None;
        }
    }

    /// Make any reply still in flight stale
    fn supersede_query(&mut self) {
        self.generation += 1;
    }

    /// Drain replies that arrived since the last poll
    fn poll_provider(&mut self, now: Instant) {
        loop {
            let Some(provider) = &self.provider else {
                return;
            };
            match provider.try_reply() {
                Ok(Some(reply)) => self.suggestions_ready(reply, now),
                Ok(None) => return,
                Err(e) => {
                    log::warn!("Dropping suggestion provider: {}", e);
                    self.provider = None;
                    return;
                }
            }
        }
    }

    /// A provider answered; show the batch unless it is no longer wanted
    ///
    /// Replies to superseded queries are dropped outright. Otherwise the batch
    /// always replaces the stored one, but is only displayed while enabled and
    /// while the field is focused and visible.
    pub fn suggestions_ready(&mut self, reply: ProviderReply, now: Instant) {
        if reply.generation != self.generation {
            log::debug!(
                "Ignoring stale suggestions (generation {}, current {})",
                reply.generation,
                self.generation
            );
            return;
        }
        if !self.enabled {
            self.suggestions = reply.suggestions;
            return;
        }
        if !self.field.has_focus() || !self.field.is_visible() {
            self.suggestions = reply.suggestions;
            return;
        }
        self.show_suggestions(reply.suggestions, now);
    }

    /// Fill the popup with `batch` and open it below the field
    pub fn show_suggestions(&mut self, batch: Vec<Suggestion>, now: Instant) {
        self.suggestions = batch;
        if self.suggestions.is_empty() {
            self.hide_suggestions();
            return;
        }

        let row_height = (self.popup.font_pixel_size() * self.row_height_factor).max(1.0) as u16;
        let rows = self.suggestions.iter().map(PopupRow::from).collect();
        self.popup.set_rows(rows, row_height);
        self.popup.set_highlighted(None);

        let height = (0..self.popup.row_count()).fold(self.popup.frame_width() * 2, |h, row| {
            h.saturating_add(self.popup.row_height_hint(row))
        });
        self.popup.resize(self.field.bounds().width, height);
        self.adjust_position();

        self.phase = PopupPhase::Open;
        if !self.popup.is_visible() {
            self.hover_armed = false;
            self.popup.show();
            self.hover_settle.schedule(now);
        }
    }

    /// Commit the highlighted row into the field
    pub fn accept_suggestion(&mut self) {
        let index = self.phase.highlighted();
        let Some(suggestion) = index.and_then(|i| self.suggestions.get(i)).cloned() else {
            log::warn!("No suggestion for index {:?}", index);
            return;
        };

        self.field.set_text(&suggestion.value);
        let text = suggestion.value.clone();
        self.notifications.push(AcceptNotification::Suggestion(suggestion));
        self.notifications.push(AcceptNotification::Text(text));
        self.original_text.clear();
        self.hide_suggestions();
    }

    /// Close the popup and put back any previewed text
    pub fn hide_suggestions(&mut self) {
        self.hover_armed = false;
        self.hover_settle.cancel();
        self.popup.hide();
        self.popup.clear();
        self.phase = PopupPhase::Hidden;
        if !self.original_text.is_empty() {
            self.field.set_text(&self.original_text);
            self.original_text.clear();
        }
        self.field.request_focus();
        self.debounce.cancel();
    }

    /// Pause suggestions until `enable_suggest`
    pub fn prevent_suggest(&mut self) {
        self.supersede_query();
        self.debounce.cancel();
        self.enabled = false;
        self.hover_armed = false;
        self.hover_settle.cancel();
        self.popup.hide();
        self.phase = PopupPhase::Hidden;
    }

    pub fn enable_suggest(&mut self) {
        self.enabled = true;
    }

    /// Keep the popup anchored directly below the field
    pub fn adjust_position(&mut self) {
        let current = self.popup.bounds();
        let target = popup::popup_below_anchor(self.field.bounds(), current.width, current.height);
        self.popup.move_to(target.x, target.y);
    }

    /// Feed one popup event through the state machine and apply its effects
    pub fn handle_event(&mut self, event: PopupEvent) -> Disposition {
        let ctx = PopupContext {
            phase: self.phase,
            hover_armed: self.hover_armed,
            row_count: self.suggestions.len().min(self.popup.row_count()),
        };
        let transition = machine::transition(ctx, event);

        for effect in &transition.effects {
            self.apply(*effect);
        }
        self.phase = transition.phase;

        transition.disposition
    }

    /// Accepted notifications since the last call, oldest first
    pub fn take_notifications(&mut self) -> Vec<AcceptNotification> {
        std::mem::take(&mut self.notifications)
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Highlight(row) => self.set_highlight(row),
            Effect::Preview(row) => {
                if let Some(suggestion) = self.suggestions.get(row) {
                    self.field.set_text(&suggestion.value);
                }
            }
            Effect::RevertText => {
                if !self.original_text.is_empty() {
                    self.field.set_text(&self.original_text);
                }
            }
            Effect::FocusField => self.field.request_focus(),
            Effect::AcceptHighlighted => self.accept_suggestion(),
            Effect::Hide => self.hide_suggestions(),
            Effect::Reposition => self.adjust_position(),
        }
    }

    fn set_highlight(&mut self, row: Option<usize>) {
        self.popup.set_highlighted(row);
        if self.phase.is_visible() {
            self.phase = match row {
                Some(row) => PopupPhase::Highlighted(row),
                None => PopupPhase::Open,
            };
        }
    }

    fn enable_item_hovering(&mut self) {
        if self.phase.is_visible() {
            self.hover_armed = true;
        }
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
