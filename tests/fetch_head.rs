//! Integration tests for fetching and parsing a document head over HTTP.

mod helpers;

use std::collections::HashMap;
use std::time::Duration;

use helpers::{
    html_response, serve_page, start_endless_server_with_status, start_truncated_server,
    test_fetcher, SAMPLE_PAGE,
};
use seo_head::{fetch_head, FetchError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_well_formed_head_routes_each_field() {
    let server = serve_page(SAMPLE_PAGE).await;

    let metadata = test_fetcher()
        .fetch(&server.uri(), None)
        .await
        .expect("fetch should succeed");

    assert_eq!(metadata.title.as_deref(), Some("Sample Page"));
    assert_eq!(metadata.description.as_deref(), Some("A sample description"));
    assert_eq!(
        metadata.canonical.as_deref(),
        Some("https://example.com/sample")
    );
    assert_eq!(
        metadata.og.get("image"),
        Some(&Some("https://example.com/og.png".to_string()))
    );
    assert_eq!(
        metadata.twitter.get("site"),
        Some(&Some("@example".to_string()))
    );
    assert_eq!(metadata.json_ld.len(), 1);
    assert_eq!(metadata.json_ld[0]["@type"], "Article");
    assert!(metadata.meta.is_empty());
    assert!(metadata.keywords.is_none());
}

#[tokio::test]
async fn test_fetch_head_convenience_function() {
    let server = serve_page(SAMPLE_PAGE).await;

    let metadata = fetch_head(&server.uri(), None)
        .await
        .expect("fetch should succeed");

    assert_eq!(metadata.title.as_deref(), Some("Sample Page"));
}

#[tokio::test]
async fn test_not_found_fails_with_unexpected_status() {
    // The 404 body never ends, so reading it would hang past the timeout
    let (url, _closed) = start_endless_server_with_status(
        "404 Not Found",
        "<html><head><title>Not Found</title></head><body>",
    )
    .await;

    let err = tokio::time::timeout(Duration::from_secs(3), test_fetcher().fetch(&url, None))
        .await
        .expect("404 should fail without reading the body")
        .expect_err("404 must fail");

    assert!(matches!(err, FetchError::UnexpectedStatus(404)));
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_other_success_codes_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = test_fetcher().fetch(&server.uri(), None).await.unwrap_err();
    assert!(matches!(err, FetchError::UnexpectedStatus(204)));
}

#[tokio::test]
async fn test_last_description_wins() {
    let server = serve_page(
        r#"<head>
            <meta name="description" content="older">
            <meta name="description" content="newer">
        </head>"#,
    )
    .await;

    let metadata = test_fetcher().fetch(&server.uri(), None).await.unwrap();
    assert_eq!(metadata.description.as_deref(), Some("newer"));
}

#[tokio::test]
async fn test_invalid_json_ld_is_skipped_and_later_block_kept() {
    let server = serve_page(
        r#"<head>
            <script type="application/ld+json">{"@type": "Broken",,}</script>
            <script type="application/ld+json">[{"@type": "BreadcrumbList"}, {"@type": "Person"}]</script>
        </head>"#,
    )
    .await;

    let metadata = test_fetcher().fetch(&server.uri(), None).await.unwrap();
    assert_eq!(metadata.json_ld.len(), 2);
    assert_eq!(metadata.json_ld[0]["@type"], "BreadcrumbList");
    assert_eq!(metadata.json_ld[1]["@type"], "Person");
}

#[tokio::test]
async fn test_document_without_head_close_still_yields_title() {
    let server = serve_page("<html><head><title>Truncated</title><meta name=\"x\" content=\"y\">").await;

    let metadata = test_fetcher().fetch(&server.uri(), None).await.unwrap();
    assert_eq!(metadata.title.as_deref(), Some("Truncated"));
    assert_eq!(metadata.meta.len(), 1);
}

#[tokio::test]
async fn test_title_after_head_is_ignored() {
    let server = serve_page(
        "<html><head><meta name=\"robots\" content=\"all\"></head><body><title>Late</title></body></html>",
    )
    .await;

    let metadata = test_fetcher().fetch(&server.uri(), None).await.unwrap();
    assert!(metadata.title.is_none());
}

#[tokio::test]
async fn test_empty_body_gives_default_metadata() {
    let server = serve_page("").await;

    let metadata = test_fetcher().fetch(&server.uri(), None).await.unwrap();
    assert!(metadata.is_empty());
}

#[tokio::test]
async fn test_caller_headers_are_sent_and_accept_is_forced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("accept", "text/html"))
        .and(header("x-custom", "yes"))
        .and(header("user-agent", "custom-agent/9"))
        .respond_with(html_response("<head><title>Matched</title></head>"))
        .expect(1)
        .mount(&server)
        .await;

    let headers = HashMap::from([
        ("X-Custom".to_string(), "yes".to_string()),
        ("User-Agent".to_string(), "custom-agent/9".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ]);

    let metadata = test_fetcher()
        .fetch(&server.uri(), Some(&headers))
        .await
        .expect("headers should match the mock");
    assert_eq!(metadata.title.as_deref(), Some("Matched"));
}

#[tokio::test]
async fn test_default_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", seo_head::config::DEFAULT_USER_AGENT))
        .respond_with(html_response("<head><title>UA</title></head>"))
        .mount(&server)
        .await;

    let metadata = test_fetcher().fetch(&server.uri(), None).await.unwrap();
    assert_eq!(metadata.title.as_deref(), Some("UA"));
}

#[tokio::test]
async fn test_invalid_caller_header_fails_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response(SAMPLE_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let headers = HashMap::from([("bad header".to_string(), "x".to_string())]);
    let err = test_fetcher()
        .fetch(&server.uri(), Some(&headers))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::InvalidHeader(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    drop(listener);

    let err = test_fetcher()
        .fetch(&format!("http://{}/", addr), None)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_connection_closed_mid_body_is_transport_error() {
    let url = start_truncated_server("<html><head><title>Cut off</title><meta name=\"a\"").await;

    let err = test_fetcher()
        .fetch(&url, None)
        .await
        .expect_err("a body shorter than its content-length must fail");
    assert!(matches!(err, FetchError::Transport(_)));
}
