//! Tests for the suggestion worker thread

use std::time::{Duration, Instant};

use super::*;
use crate::suggestion::Suggestion;

fn echo_suggester(query: &str) -> Vec<Suggestion> {
    vec![Suggestion::new(format!("{query}!"), "video")]
}

/// Poll the link until a reply arrives or the timeout elapses
fn wait_for_reply(link: &ProviderLink, timeout_ms: u64) -> Option<ProviderReply> {
    let start = Instant::now();
    let timeout = Duration::from_millis(timeout_ms);

    while start.elapsed() < timeout {
        if let Ok(Some(reply)) = link.try_reply() {
            return Some(reply);
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    None
}

#[test]
fn test_worker_answers_request() {
    let link = spawn_worker(echo_suggester, Duration::ZERO);
    link.request("cat", 7).unwrap();

    let reply = wait_for_reply(&link, 2000).expect("worker should reply");
    assert_eq!(reply.generation, 7);
    assert_eq!(reply.suggestions, vec![Suggestion::new("cat!", "video")]);
}

#[test]
fn test_worker_answers_requests_in_order() {
    let link = spawn_worker(echo_suggester, Duration::ZERO);

    link.request("a", 1).unwrap();
    let first = wait_for_reply(&link, 2000).expect("first reply");
    link.request("b", 2).unwrap();
    let second = wait_for_reply(&link, 2000).expect("second reply");

    assert_eq!(first.generation, 1);
    assert_eq!(second.generation, 2);
    assert_eq!(second.suggestions[0].value, "b!");
}

#[test]
fn test_newest_pending_skips_backlog() {
    let (link, endpoint) = ProviderLink::pair();
    link.request("c", 1).unwrap();
    link.request("ca", 2).unwrap();
    link.request("cat", 3).unwrap();

    let first = endpoint.request_rx.recv().unwrap();
    let newest = newest_pending(&endpoint, first).unwrap();

    assert_eq!(newest.query, "cat");
    assert_eq!(newest.generation, 3);
}

#[test]
fn test_newest_pending_detects_disconnect() {
    let (link, endpoint) = ProviderLink::pair();
    link.request("c", 1).unwrap();
    let first = endpoint.request_rx.recv().unwrap();
    drop(link);

    assert!(newest_pending(&endpoint, first).is_none());
}
