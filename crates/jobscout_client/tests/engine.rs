use std::sync::Arc;
use std::time::Duration;

use jobscout_client::{
    ClientEvent, ClientHandle, FailureKind, FetchError, JobSearcher, ScrapeResponse, SubmitError,
};

const WAIT: Duration = Duration::from_secs(5);

/// Answers at once, except for the keyword "slow" which never finishes on its own.
struct ScriptedSearcher;

#[async_trait::async_trait]
impl JobSearcher for ScriptedSearcher {
    async fn search(&self, keywords: &[String]) -> Result<ScrapeResponse, FetchError> {
        if keywords.iter().any(|keyword| keyword == "slow") {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        Ok(ScrapeResponse {
            jobs: Vec::new(),
            companies_by_keyword: None,
            total_jobs: Some(keywords.len()),
        })
    }
}

fn spawn() -> (ClientHandle, jobscout_client::ClientEvents) {
    scout_logging::initialize_for_tests();
    ClientHandle::spawn_with(Arc::new(ScriptedSearcher)).expect("spawn client")
}

#[test]
fn completed_request_is_reported_and_frees_the_slot() {
    let (handle, events) = spawn();

    handle.submit(1, vec!["rust".to_string()]).expect("submit");
    let event = events.recv_timeout(WAIT).expect("completion");

    match event {
        ClientEvent::SearchCompleted { request_id, result } => {
            assert_eq!(request_id, 1);
            assert_eq!(result.expect("ok").total_jobs, Some(1));
        }
    }
    assert_eq!(handle.in_flight(), None);
    handle.submit(2, Vec::new()).expect("slot is free again");
}

#[test]
fn second_submit_is_rejected_while_one_is_outstanding() {
    let (handle, events) = spawn();

    handle.submit(1, vec!["slow".to_string()]).expect("submit");
    let err = handle.submit(2, vec!["rust".to_string()]).unwrap_err();

    assert_eq!(err, SubmitError::Busy { in_flight: 1 });
    assert_eq!(handle.in_flight(), Some(1));
    assert!(events.recv_timeout(Duration::from_millis(100)).is_none());
}

#[test]
fn cancel_reports_cancelled_and_allows_a_new_request() {
    let (handle, events) = spawn();

    handle.submit(1, vec!["slow".to_string()]).expect("submit");
    handle.cancel(1);
    assert_eq!(handle.in_flight(), None);

    match events.recv_timeout(WAIT).expect("cancelled completion") {
        ClientEvent::SearchCompleted { request_id, result } => {
            assert_eq!(request_id, 1);
            assert_eq!(result.unwrap_err().kind, FailureKind::Cancelled);
        }
    }

    handle.submit(2, vec!["rust".to_string()]).expect("submit after cancel");
    match events.recv_timeout(WAIT).expect("completion") {
        ClientEvent::SearchCompleted { request_id, result } => {
            assert_eq!(request_id, 2);
            assert!(result.is_ok());
        }
    }
}

#[test]
fn cancelling_an_unknown_request_keeps_the_current_one() {
    let (handle, _events) = spawn();

    handle.submit(4, vec!["slow".to_string()]).expect("submit");
    handle.cancel(3);

    assert_eq!(handle.in_flight(), Some(4));
}
