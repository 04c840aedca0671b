use std::time::Duration;

use jobscout_client::{ClientSettings, FailureKind, JobSearcher, ReqwestSearcher};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn searcher_for(server: &MockServer) -> ReqwestSearcher {
    ReqwestSearcher::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
}

fn keywords(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[tokio::test]
async fn posts_keywords_and_parses_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape_jobs"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "keywords": ["backend", "remote"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [{
                "title": "SWE",
                "company": "Acme",
                "location": "N/A",
                "salary_range": "$100k-$150k",
                "posted_date": "2024-01-01",
                "job_url": "https://x/y",
                "logo_url": "N/A",
                "keyword": "backend"
            }],
            "companies_by_keyword": { "remote": [], "backend": ["Acme"] },
            "total_jobs": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = searcher_for(&server)
        .search(&keywords(&["backend", "remote"]))
        .await
        .expect("search ok");

    assert_eq!(response.jobs.len(), 1);
    assert_eq!(response.jobs[0].title, "SWE");
    assert_eq!(response.jobs[0].salary_range, "$100k-$150k");
    assert_eq!(response.jobs[0].job_url, "https://x/y");
    assert_eq!(response.total_jobs, Some(1));
    let groups = response.companies_by_keyword.expect("groups").0;
    assert_eq!(
        groups,
        vec![
            ("remote".to_string(), Vec::new()),
            ("backend".to_string(), vec!["Acme".to_string()]),
        ]
    );
}

#[tokio::test]
async fn empty_keyword_list_is_sent_as_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape_jobs"))
        .and(body_json(json!({ "keywords": [] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobs": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = searcher_for(&server).search(&[]).await.expect("search ok");
    assert!(response.jobs.is_empty());
    assert_eq!(response.companies_by_keyword, None);
}

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape_jobs"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "scraper crashed" })),
        )
        .mount(&server)
        .await;

    let err = searcher_for(&server)
        .search(&keywords(&["backend"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn unparseable_failure_body_still_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape_jobs"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<html>bad</html>"))
        .mount(&server)
        .await;

    let err = searcher_for(&server)
        .search(&keywords(&["backend"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(400));
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape_jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"jobs\": [oops"))
        .mount(&server)
        .await;

    let err = searcher_for(&server)
        .search(&keywords(&["backend"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn missing_jobs_field_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape_jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total_jobs": 3 })))
        .mount(&server)
        .await;

    let err = searcher_for(&server).search(&[]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape_jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "jobs": [] })),
        )
        .mount(&server)
        .await;

    let searcher = ReqwestSearcher::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    });

    let err = searcher.search(&[]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape_jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("{\"jobs\": []}   "),
        )
        .mount(&server)
        .await;

    let searcher = ReqwestSearcher::new(ClientSettings {
        base_url: server.uri(),
        max_bytes: 10,
        ..ClientSettings::default()
    });

    let err = searcher.search(&[]).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(15)
        }
    );
}

#[tokio::test]
async fn unreachable_service_is_a_network_failure() {
    let searcher = ReqwestSearcher::new(ClientSettings {
        // Port 9 (discard) is closed on test machines.
        base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout: Duration::from_millis(500),
        ..ClientSettings::default()
    });

    let err = searcher.search(&[]).await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
}

#[tokio::test]
async fn bad_base_url_fails_before_any_io() {
    let searcher = ReqwestSearcher::new(ClientSettings {
        base_url: "::nope::".to_string(),
        ..ClientSettings::default()
    });

    let err = searcher.search(&[]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
