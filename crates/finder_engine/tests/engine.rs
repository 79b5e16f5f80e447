use std::sync::{Arc, Mutex};
use std::time::Duration;

use finder_engine::{
    decode_payload, EngineEvent, EngineHandle, FailureKind, FetchError, SearchClient,
    SearchPayload,
};

const WAIT: Duration = Duration::from_secs(5);

/// Answers from a fixed table after a per-term delay, recording every call.
struct ScriptedClient {
    calls: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SearchClient for ScriptedClient {
    async fn search(&self, term: &str) -> Result<SearchPayload, FetchError> {
        self.calls.lock().unwrap().push(term.to_string());
        match term {
            "slow" => {
                tokio::time::sleep(Duration::from_millis(300)).await;
                decode_payload(br#"{"Response":"False","Error":"slow"}"#)
            }
            "broken" => decode_payload(b"not json"),
            _ => decode_payload(br#"{"Response":"False","Error":"Movie not found!"}"#),
        }
    }
}

#[test]
fn search_results_are_tagged_with_their_term() {
    let client = ScriptedClient::new();
    let engine = EngineHandle::with_client(client.clone()).expect("engine");

    engine.search("slow");
    engine.search("fast");

    let first = engine.recv_timeout(WAIT).expect("first event");
    let second = engine.recv_timeout(WAIT).expect("second event");

    // The fast request overtakes the slow one; the tag says which is which.
    match (first, second) {
        (
            EngineEvent::SearchCompleted { term: a, result: ra },
            EngineEvent::SearchCompleted { term: b, result: rb },
        ) => {
            assert_eq!(a, "fast");
            assert_eq!(ra.unwrap().error.as_deref(), Some("Movie not found!"));
            assert_eq!(b, "slow");
            assert_eq!(rb.unwrap().error.as_deref(), Some("slow"));
        }
        other => panic!("unexpected events: {other:?}"),
    }
    assert_eq!(client.calls().len(), 2);
}

#[test]
fn transport_errors_are_reported_not_retried() {
    let client = ScriptedClient::new();
    let engine = EngineHandle::with_client(client.clone()).expect("engine");

    engine.search("broken");
    let event = engine.recv_timeout(WAIT).expect("event");

    match event {
        EngineEvent::SearchCompleted { term, result } => {
            assert_eq!(term, "broken");
            assert_eq!(result.unwrap_err().kind, FailureKind::MalformedBody);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(engine.recv_timeout(Duration::from_millis(200)).is_none());
    assert_eq!(client.calls(), vec!["broken".to_string()]);
}

#[test]
fn rescheduled_timer_reports_only_latest_ticket() {
    let engine = EngineHandle::with_client(ScriptedClient::new()).expect("engine");

    engine.schedule_timer(1, Duration::from_millis(150));
    engine.schedule_timer(2, Duration::from_millis(150));

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::TimerElapsed { ticket: 2 })
    );
    assert!(engine.recv_timeout(Duration::from_millis(300)).is_none());
}

#[test]
fn cancelled_timer_never_fires() {
    let engine = EngineHandle::with_client(ScriptedClient::new()).expect("engine");

    engine.schedule_timer(1, Duration::from_millis(100));
    engine.cancel_timer();

    assert!(engine.recv_timeout(Duration::from_millis(400)).is_none());
}
