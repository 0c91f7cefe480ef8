use std::time::Instant;

use crate::autocomplete::{AcceptNotification, AutoComplete, AutocompleteSettings};
use crate::input::SearchField;
use crate::popup::PopupList;
use crate::provider::ProviderLink;
use crate::suggestion::Suggestion;
use crate::surface::TextSurface;

pub type SearchAutoComplete = AutoComplete<SearchField, PopupList>;

/// Something that happened in the search box, newest last
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultEntry {
    /// Enter pressed with free text
    Searched(String),
    /// A suggestion was accepted from the popup
    Opened(Suggestion),
}

/// Application state
pub struct App {
    pub autocomplete: SearchAutoComplete,
    pub results: Vec<ResultEntry>,
    pub last_accepted: Option<String>,
    pub catalog_size: usize,
    pub(super) pointer_in_popup: bool,
    pub(super) should_quit: bool,
}

impl App {
    pub fn new(settings: AutocompleteSettings) -> Self {
        Self {
            autocomplete: AutoComplete::new(SearchField::new(), PopupList::new(), settings),
            results: Vec::new(),
            last_accepted: None,
            catalog_size: 0,
            pointer_in_popup: false,
            should_quit: false,
        }
    }

    pub fn set_suggester(&mut self, provider: ProviderLink, catalog_size: usize) {
        self.autocomplete.set_suggester(provider);
        self.catalog_size = catalog_size;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of the search field
    pub fn query(&self) -> String {
        self.autocomplete.field().text()
    }

    /// Advance timers and pick up provider replies
    pub fn tick(&mut self, now: Instant) {
        self.autocomplete.tick(now);
        self.collect_notifications();
    }

    /// Pause or resume suggestions
    pub fn toggle_suggestions(&mut self) {
        if self.autocomplete.is_enabled() {
            self.autocomplete.prevent_suggest();
            log::info!("Suggestions paused");
        } else {
            self.autocomplete.enable_suggest();
            log::info!("Suggestions resumed");
        }
    }

    /// Run a plain-text search with whatever is in the field
    pub fn submit_search(&mut self) {
        let query = self.query();
        if query.trim().is_empty() {
            return;
        }
        log::info!("Search submitted: {:?}", query);
        self.results.push(ResultEntry::Searched(query));
    }

    pub(super) fn collect_notifications(&mut self) {
        for notification in self.autocomplete.take_notifications() {
            match notification {
                AcceptNotification::Suggestion(suggestion) => {
                    self.results.push(ResultEntry::Opened(suggestion));
                }
                AcceptNotification::Text(text) => {
                    log::info!("Accepted suggestion {:?}", text);
                    self.last_accepted = Some(text);
                }
            }
        }
    }
}
