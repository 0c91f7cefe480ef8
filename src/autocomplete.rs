mod autocomplete_state;

pub use autocomplete_state::{AcceptNotification, AutoComplete, AutocompleteSettings};
