//! Tests for the provider channel contract

use super::*;

#[test]
fn test_request_reaches_endpoint() {
    let (link, endpoint) = ProviderLink::pair();
    link.request("cat", 3).unwrap();

    let request = endpoint.request_rx.recv().unwrap();
    assert_eq!(request.query, "cat");
    assert_eq!(request.generation, 3);
}

#[test]
fn test_try_reply_empty() {
    let (link, _endpoint) = ProviderLink::pair();
    assert_eq!(link.try_reply(), Ok(None));
}

#[test]
fn test_try_reply_returns_sent_reply() {
    let (link, endpoint) = ProviderLink::pair();
    endpoint
        .reply_tx
        .send(ProviderReply {
            generation: 1,
            suggestions: vec![Suggestion::new("cats", "channel")],
        })
        .unwrap();

    let reply = link.try_reply().unwrap().unwrap();
    assert_eq!(reply.generation, 1);
    assert_eq!(reply.suggestions.len(), 1);
}

#[test]
fn test_request_after_endpoint_dropped_fails() {
    let (link, endpoint) = ProviderLink::pair();
    drop(endpoint);

    assert_eq!(link.request("cat", 1), Err(SuggestError::ProviderDisconnected));
    assert_eq!(link.try_reply(), Err(SuggestError::ProviderDisconnected));
}

#[test]
fn test_closure_is_a_suggester() {
    let mut suggester = |query: &str| vec![Suggestion::new(format!("{query}s"), "")];
    let suggestions = Suggester::suggest(&mut suggester, "cat");
    assert_eq!(suggestions, vec![Suggestion::new("cats", "")]);
}
