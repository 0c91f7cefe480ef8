//! Configuration loading
//!
//! Reads `~/.config/mediasuggest/config.toml`. A missing file means
//! defaults; a file that exists but does not parse is an error.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{CatalogConfig, Config, SuggestConfig};

use crate::error::SuggestError;

const CONFIG_DIR: &str = "mediasuggest";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> Result<Config, SuggestError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, SuggestError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

pub fn parse_config(content: &str) -> Result<Config, SuggestError> {
    toml::from_str(content).map_err(|e| SuggestError::Config(e.to_string()))
}
