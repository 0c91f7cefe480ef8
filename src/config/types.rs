// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Suggestion behaviour section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Quiet period after the last keystroke before querying
    pub debounce_ms: u64,
    /// Delay after the popup opens before hovering selects rows
    pub hover_delay_ms: u64,
    /// Row height as a multiple of the popup font size
    pub row_height_factor: f32,
    /// Upper bound on suggestions per query
    pub max_results: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            debounce_ms: 500,
            hover_delay_ms: 100,
            row_height_factor: 1.0,
            max_results: 10,
        }
    }
}

/// Catalog section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
    /// Artificial delay added to every provider reply
    pub latency_ms: u64,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}
