//! Debounced search-box autocomplete
//!
//! [`autocomplete::AutoComplete`] drives a text surface and a popup list
//! surface, queries a suggestion provider over a channel, and lets the user
//! preview, accept or dismiss suggestions. The terminal front-end in [`app`]
//! hosts it over a local media catalog.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod debouncer;
pub mod error;
pub mod input;
pub mod layout;
pub mod popup;
pub mod provider;
pub mod suggestion;
pub mod surface;
pub mod widgets;
