use thiserror::Error;

/// Errors surfaced by mediasuggest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Suggestion provider disconnected")]
    ProviderDisconnected,
}

impl From<std::io::Error> for SuggestError {
    fn from(err: std::io::Error) -> Self {
        SuggestError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
