//! Suggestion worker thread
//!
//! Runs a `Suggester` off the UI thread. Receives requests via channel,
//! answers each with a reply tagged with the request's generation, and exits
//! once the controller drops its `ProviderLink`.

use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use super::{ProviderEndpoint, ProviderLink, ProviderReply, ProviderRequest, Suggester};

/// Spawn a worker thread serving `suggester`
///
/// `latency` delays every reply; the bundled catalog uses it to imitate a
/// remote service so that stale replies can be observed.
pub fn spawn_worker<S: Suggester>(suggester: S, latency: Duration) -> ProviderLink {
    let (link, endpoint) = ProviderLink::pair();

    std::thread::spawn(move || {
        worker_loop(suggester, endpoint, latency);
    });

    link
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop<S: Suggester>(mut suggester: S, endpoint: ProviderEndpoint, latency: Duration) {
    while let Ok(request) = endpoint.request_rx.recv() {
        let request = match newest_pending(&endpoint, request) {
            Some(request) => request,
            None => break,
        };

        if !latency.is_zero() {
            std::thread::sleep(latency);
        }

        let suggestions = suggester.suggest(&request.query);
        log::debug!(
            "Suggested {} entries for {:?} (generation {})",
            suggestions.len(),
            request.query,
            request.generation
        );

        let reply = ProviderReply {
            generation: request.generation,
            suggestions,
        };
        if endpoint.reply_tx.send(reply).is_err() {
            // Controller disconnected
            break;
        }
    }

    log::debug!("Suggestion worker shutting down");
}

/// Skip over requests that were already superseded by newer ones
///
/// Returns None when the controller hung up while draining.
fn newest_pending(endpoint: &ProviderEndpoint, mut current: ProviderRequest) -> Option<ProviderRequest> {
    loop {
        match endpoint.request_rx.try_recv() {
            Ok(newer) => {
                log::debug!(
                    "Skipping superseded request {} for {}",
                    current.generation,
                    newer.generation
                );
                current = newer;
            }
            Err(TryRecvError::Empty) => return Some(current),
            Err(TryRecvError::Disconnected) => return None,
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
