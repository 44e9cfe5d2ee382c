//! Error handling tests for both endpoints
//!
//! Non-success statuses surface as `HttpError` carrying the status code and
//! are never retried. Transport and decoding failures stay distinguishable
//! from that kind.

mod common;

use std::time::Duration;

use common::create_mock_client;
use papers_client::{ClientConfig, PubMedClient, PubMedError};
use rstest::rstest;
use tracing_test::traced_test;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[rstest]
#[case::bad_request(400)]
#[case::forbidden(403)]
#[case::not_found(404)]
#[case::too_many_requests(429)]
#[case::internal_error(500)]
#[case::service_unavailable(503)]
#[tokio::test]
async fn test_search_non_success_status(#[case] status: u16) {
    let mock_server = MockServer::start().await;

    // expect(1): a failed request must not be retried
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(r#"{"esearchresult":{"idlist":["1"]}}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.search_ids("cancer").await.unwrap_err();

    match err {
        PubMedError::HttpError { status: got, .. } => assert_eq!(got, status),
        other => panic!("expected HttpError, got {:?}", other),
    }
}

#[rstest]
#[case::bad_request(400)]
#[case::not_found(404)]
#[case::too_many_requests(429)]
#[case::bad_gateway(502)]
#[tokio::test]
async fn test_fetch_non_success_status(#[case] status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(status).set_body_string("<eFetchResult/>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_details(&["111", "222"]).await.unwrap_err();

    assert_eq!(err.status(), Some(status));
    assert!(matches!(err, PubMedError::HttpError { .. }));
}

#[tokio::test]
#[traced_test]
async fn test_http_error_message_uses_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.search_ids("cancer").await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP error 503: Service Unavailable");
    assert!(logs_contain("API request failed with status: 503"));
}

#[tokio::test]
#[traced_test]
async fn test_search_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.search_ids("cancer").await.unwrap_err();

    assert!(matches!(err, PubMedError::JsonError(_)));
    assert!(!err.is_invalid_argument());
    assert_eq!(err.status(), None);
}

#[tokio::test]
#[traced_test]
async fn test_connection_refused_is_request_error() {
    // Nothing listens on the discard port
    let client = PubMedClient::with_config(
        ClientConfig::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(5)),
    );

    let err = client.search_ids("cancer").await.unwrap_err();
    assert!(matches!(err, PubMedError::RequestError(_)));

    let err = client.fetch_details(&["1"]).await.unwrap_err();
    assert!(matches!(err, PubMedError::RequestError(_)));
}

#[tokio::test]
#[traced_test]
async fn test_timeout_is_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<PubmedArticleSet/>")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = PubMedClient::with_config(config);

    match client.fetch_details(&["1"]).await {
        Err(PubMedError::RequestError(err)) => assert!(err.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}
