//! Suggestion provider contract
//!
//! A provider receives queries and answers them later. The controller holds
//! a `ProviderLink`; the provider side holds the matching `ProviderEndpoint`.
//! Every request carries a generation number which the reply echoes back, so
//! the controller can recognise replies to queries it has since superseded.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::error::SuggestError;
use crate::suggestion::Suggestion;

pub mod catalog;
pub mod worker;

pub use catalog::{CatalogSuggester, load_catalog};
pub use worker::spawn_worker;

/// Query sent to a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    pub query: String,
    pub generation: u64,
}

/// Answer to one `ProviderRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub generation: u64,
    pub suggestions: Vec<Suggestion>,
}

/// Synchronous suggestion source run on the provider's side of the channel
pub trait Suggester: Send + 'static {
    fn suggest(&mut self, query: &str) -> Vec<Suggestion>;
}

impl<F> Suggester for F
where
    F: FnMut(&str) -> Vec<Suggestion> + Send + 'static,
{
    fn suggest(&mut self, query: &str) -> Vec<Suggestion> {
        self(query)
    }
}

/// Controller side of a provider connection
///
/// Dropping the link disconnects from the provider.
#[derive(Debug)]
pub struct ProviderLink {
    request_tx: Sender<ProviderRequest>,
    reply_rx: Receiver<ProviderReply>,
}

/// Provider side of a provider connection
#[derive(Debug)]
pub struct ProviderEndpoint {
    pub request_rx: Receiver<ProviderRequest>,
    pub reply_tx: Sender<ProviderReply>,
}

impl ProviderLink {
    /// Create a connected link/endpoint pair
    pub fn pair() -> (ProviderLink, ProviderEndpoint) {
        let (request_tx, request_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();
        (
            ProviderLink {
                request_tx,
                reply_rx,
            },
            ProviderEndpoint {
                request_rx,
                reply_tx,
            },
        )
    }

    pub fn request(&self, query: &str, generation: u64) -> Result<(), SuggestError> {
        self.request_tx
            .send(ProviderRequest {
                query: query.to_string(),
                generation,
            })
            .map_err(|_| SuggestError::ProviderDisconnected)
    }

    /// Non-blocking check for the next reply
    pub fn try_reply(&self) -> Result<Option<ProviderReply>, SuggestError> {
        match self.reply_rx.try_recv() {
            Ok(reply) => Ok(Some(reply)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SuggestError::ProviderDisconnected),
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
