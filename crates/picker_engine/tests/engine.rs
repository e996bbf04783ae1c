use std::sync::Arc;
use std::time::Duration;

use picker_engine::{
    CharacterRecord, EngineEvent, EngineHandle, FailureKind, SearchError, Searcher,
};

/// Answers after a delay derived from the name, so completions can be reordered.
struct ScriptedSearcher;

#[async_trait::async_trait]
impl Searcher for ScriptedSearcher {
    async fn search(&self, name: Option<&str>) -> Result<Vec<CharacterRecord>, SearchError> {
        let name = name.unwrap_or_default();
        if name.starts_with("slow") {
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
        if name == "broken" {
            return Err(SearchError {
                kind: FailureKind::Network,
                message: "connection reset".to_string(),
            });
        }
        Ok(vec![CharacterRecord {
            id: name.len() as u64,
            name: name.to_string(),
            image: String::new(),
            episode: Vec::new(),
        }])
    }
}

fn next_completion(engine: &EngineHandle) -> (u64, Result<Vec<CharacterRecord>, SearchError>) {
    match engine.recv_timeout(Duration::from_secs(5)) {
        Some(EngineEvent::SearchCompleted { dispatch, result }) => (dispatch, result),
        None => panic!("no completion within timeout"),
    }
}

#[test]
fn completions_carry_their_dispatch_and_may_arrive_out_of_order() {
    let engine = EngineHandle::with_searcher(Arc::new(ScriptedSearcher));

    engine.search(1, Some("slow sum".to_string()));
    engine.search(2, Some("summer".to_string()));

    let (first_dispatch, first) = next_completion(&engine);
    let (second_dispatch, second) = next_completion(&engine);

    assert_eq!(first_dispatch, 2);
    assert_eq!(first.unwrap()[0].name, "summer");
    assert_eq!(second_dispatch, 1);
    assert_eq!(second.unwrap()[0].name, "slow sum");
}

#[test]
fn failures_are_reported_as_events() {
    let engine = EngineHandle::with_searcher(Arc::new(ScriptedSearcher));

    engine.search(7, Some("broken".to_string()));

    let (dispatch, result) = next_completion(&engine);
    assert_eq!(dispatch, 7);
    assert_eq!(result.unwrap_err().message, "connection reset");
    assert!(engine.try_recv().is_none());
}
