//! End-to-end cycles against a mock summarisation service.

mod common;

use common::mock_service::{MockReply, MockService};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use vidsum::summary::FALLBACK_ERROR;
use vidsum::{HttpSummaryService, PopupView, SharedView, SummaryRequester, UiState};

async fn requester_for(
    mock: &MockService,
    input: &str,
) -> SummaryRequester<HttpSummaryService, SharedView> {
    let service = HttpSummaryService::with_url(mock.summarize_url()).unwrap();
    SummaryRequester::new(Arc::new(service), Arc::new(SharedView::with_input(input)))
}

#[tokio::test]
async fn posts_video_id_as_json() {
    let mock = MockService::start().await;
    mock.enqueue(MockReply::json(200, r#"{"summary": "S"}"#)).await;
    let requester = requester_for(&mock, "https://youtu.be/dQw4w9WgXcQ").await;

    requester.activate().await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/summarize");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "video_id": "https://youtu.be/dQw4w9WgXcQ" })
    );
}

#[tokio::test]
async fn success_reply_ends_with_summary_shown() {
    let mock = MockService::start().await;
    mock.enqueue(MockReply::json(
        200,
        r#"{"summary": "S", "chunks": ["c1", "c2"]}"#,
    ))
    .await;
    let requester = requester_for(&mock, "abc").await;

    let outcome = requester.activate().await;

    assert_eq!(UiState::from(&outcome), UiState::Success("S".to_string()));
    assert_eq!(outcome.unwrap().chunks, vec!["c1", "c2"]);
    let regions = requester.view().snapshot();
    assert!(regions.result_visible);
    assert_eq!(regions.result_text, "S");
    assert!(!regions.progress_visible);
}

#[tokio::test]
async fn error_reply_shows_service_message() {
    let mock = MockService::start().await;
    mock.enqueue(MockReply::json(400, r#"{"error": "Invalid YouTube URL or Video ID"}"#))
        .await;
    let requester = requester_for(&mock, "not-a-video").await;

    requester.activate().await.unwrap_err();

    let regions = requester.view().snapshot();
    assert!(regions.result_visible);
    assert_eq!(regions.result_text, "Invalid YouTube URL or Video ID");
    assert!(!regions.progress_visible);
}

#[tokio::test]
async fn error_reply_without_message_uses_fallback() {
    let mock = MockService::start().await;
    mock.enqueue(MockReply::json(500, "{}")).await;
    let requester = requester_for(&mock, "abc").await;

    requester.activate().await.unwrap_err();

    let regions = requester.view().snapshot();
    assert_eq!(regions.result_text, FALLBACK_ERROR);
    assert!(!regions.progress_visible);
}

#[tokio::test]
async fn malformed_reply_is_prefixed_error() {
    let mock = MockService::start().await;
    mock.enqueue(MockReply::json(200, "not json")).await;
    let requester = requester_for(&mock, "abc").await;

    requester.activate().await.unwrap_err();

    let regions = requester.view().snapshot();
    assert!(regions.result_visible);
    assert!(regions.result_text.starts_with("Error: "));
    assert!(!regions.progress_visible);
}

#[tokio::test]
async fn unreachable_service_is_prefixed_error() {
    // Bind then drop a listener to get a port nothing is listening on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let service =
        HttpSummaryService::with_url(format!("http://127.0.0.1:{port}/summarize")).unwrap();
    let view = Arc::new(SharedView::with_input("abc"));
    let requester = SummaryRequester::new(Arc::new(service), Arc::clone(&view));

    requester.activate().await.unwrap_err();

    let regions = view.snapshot();
    assert!(regions.result_visible);
    assert!(regions.result_text.starts_with("Error: "));
    assert!(!regions.progress_visible);
    assert_eq!(view.input_value(), "abc");
}

#[tokio::test]
async fn null_reply_is_prefixed_error_not_empty_summary() {
    let mock = MockService::start().await;
    mock.enqueue(MockReply::json(200, "null")).await;
    let requester = requester_for(&mock, "abc").await;

    requester.activate().await.unwrap_err();

    let regions = requester.view().snapshot();
    assert!(regions.result_visible);
    assert!(regions.result_text.starts_with("Error: "));
    assert!(!regions.progress_visible);
}
