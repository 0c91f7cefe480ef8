//! Local media catalog suggester
//!
//! Fuzzy-matches the query against a list of catalog entries (channels,
//! videos, playlists). Catalogs are read from TOML or JSON files; a small
//! built-in catalog is used when none is configured.

use std::fmt;
use std::fs;
use std::path::Path;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Deserialize;

use super::Suggester;
use crate::error::SuggestError;
use crate::suggestion::Suggestion;

const BUILTIN_CATALOG: &str = r#"
[[entries]]
value = "cats"
kind = "channel"

[[entries]]
value = "category theory for programmers"
kind = "playlist"

[[entries]]
value = "cat videos compilation"
kind = "video"

[[entries]]
value = "catalan cooking"
kind = "channel"

[[entries]]
value = "jazz piano live"
kind = "video"

[[entries]]
value = "jazz standards"
kind = "playlist"

[[entries]]
value = "rust programming"
kind = "channel"

[[entries]]
value = "rustic woodworking"
kind = "video"

[[entries]]
value = "lofi beats to study to"
kind = "playlist"

[[entries]]
value = "space documentaries"
kind = "category"

[[entries]]
value = "speedrun highlights"
kind = "video"

[[entries]]
value = "synthwave mix"
kind = ""
"#;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<Suggestion>,
}

/// Entries of the built-in catalog
pub fn builtin_catalog() -> Vec<Suggestion> {
    parse_catalog_toml(BUILTIN_CATALOG).unwrap_or_default()
}

/// Load catalog entries from a `.json` or `.toml` file
pub fn load_catalog(path: &Path) -> Result<Vec<Suggestion>, SuggestError> {
    let contents = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_catalog_json(&contents)
    } else {
        parse_catalog_toml(&contents)
    }
}

pub fn parse_catalog_toml(content: &str) -> Result<Vec<Suggestion>, SuggestError> {
    toml::from_str::<CatalogFile>(content)
        .map(|file| file.entries)
        .map_err(|e| SuggestError::Catalog(e.to_string()))
}

pub fn parse_catalog_json(content: &str) -> Result<Vec<Suggestion>, SuggestError> {
    serde_json::from_str::<Vec<Suggestion>>(content).map_err(|e| SuggestError::Catalog(e.to_string()))
}

pub struct CatalogSuggester {
    entries: Vec<Suggestion>,
    matcher: SkimMatcherV2,
    max_results: usize,
}

impl fmt::Debug for CatalogSuggester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogSuggester")
            .field("entries", &self.entries.len())
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl CatalogSuggester {
    pub fn new(entries: Vec<Suggestion>, max_results: usize) -> Self {
        Self {
            entries,
            matcher: SkimMatcherV2::default(),
            max_results,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best matches for `query`, highest score first
    ///
    /// Ties keep catalog order.
    pub fn matches(&self, query: &str) -> Vec<Suggestion> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, i64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                self.matcher
                    .fuzzy_match(&entry.value, query)
                    .map(|score| (idx, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored
            .into_iter()
            .take(self.max_results)
            .map(|(idx, _)| self.entries[idx].clone())
            .collect()
    }
}

impl Suggester for CatalogSuggester {
    fn suggest(&mut self, query: &str) -> Vec<Suggestion> {
        self.matches(query)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
