// Shared test helpers for mock servers and fetcher setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::time::Duration;

use seo_head::{Config, HeadFetcher};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A small but complete document head used by several tests.
#[allow(dead_code)]
pub const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Sample Page</title>
  <meta name="description" content="A sample description">
  <link rel="canonical" href="https://example.com/sample">
  <meta property="og:image" content="https://example.com/og.png">
  <meta name="twitter:site" content="@example">
  <script type="application/ld+json">{"@context": "https://schema.org", "@type": "Article"}</script>
</head>
<body><p>Body text</p></body>
</html>"#;

/// Creates a fetcher with a short timeout suitable for tests.
#[allow(dead_code)]
pub fn test_fetcher() -> HeadFetcher {
    let config = Config {
        timeout_seconds: 5,
        ..Default::default()
    };
    HeadFetcher::new(&config).expect("Failed to build test fetcher")
}

/// Builds a 200 `text/html` response with the given body.
#[allow(dead_code)]
pub fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

/// Starts a mock server that answers `GET /` with `body`.
#[allow(dead_code)]
pub async fn serve_page(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(body))
        .mount(&server)
        .await;
    server
}

/// Mounts `/hop/0` → `/hop/1` → ... → `/hop/{hops}`, where the last path
/// serves `final_body`. Returns the URL of `/hop/0`.
#[allow(dead_code)]
pub async fn mount_redirect_chain(server: &MockServer, hops: usize, final_body: &str) -> String {
    for hop in 0..hops {
        Mock::given(method("GET"))
            .and(path(format!("/hop/{}", hop)))
            .respond_with(
                ResponseTemplate::new(302).insert_header("location", format!("/hop/{}", hop + 1)),
            )
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(format!("/hop/{}", hops)))
        .respond_with(html_response(final_body))
        .mount(server)
        .await;

    format!("{}/hop/0", server.uri())
}

/// Starts a raw HTTP server that sends `head` and then keeps streaming filler
/// forever, without ever closing the body.
///
/// Returns the server URL and a receiver that fires once a write fails,
/// i.e. once the client has torn down the connection.
#[allow(dead_code)]
pub async fn start_endless_server(head: &'static str) -> (String, oneshot::Receiver<()>) {
    start_endless_server_with_status("200 OK", head).await
}

/// Like [`start_endless_server`], but answers with the given status line
/// (e.g. `"404 Not Found"`).
#[allow(dead_code)]
pub async fn start_endless_server_with_status(
    status: &'static str,
    head: &'static str,
) -> (String, oneshot::Receiver<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let (closed_tx, closed_rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        if !read_request(&mut socket).await {
            return;
        }

        let preamble = format!(
            "HTTP/1.1 {}\r\ncontent-type: text/html\r\nconnection: close\r\n\r\n",
            status
        );
        if socket.write_all(preamble.as_bytes()).await.is_err()
            || socket.write_all(head.as_bytes()).await.is_err()
        {
            let _ = closed_tx.send(());
            return;
        }

        let filler = "<p>filler</p>".repeat(1024);
        loop {
            if socket.write_all(filler.as_bytes()).await.is_err() {
                let _ = closed_tx.send(());
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    });

    (format!("http://{}/", addr), closed_rx)
}

/// Starts a raw HTTP server that promises a 10000-byte body, sends only
/// `partial` and then closes the connection.
#[allow(dead_code)]
pub async fn start_truncated_server(partial: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        if !read_request(&mut socket).await {
            return;
        }

        let preamble =
            "HTTP/1.1 200 OK\r\ncontent-type: text/html\r\ncontent-length: 10000\r\n\r\n";
        let _ = socket.write_all(preamble.as_bytes()).await;
        let _ = socket.write_all(partial.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}/", addr)
}

/// Consumes the request headers. Returns `false` if the client went away.
async fn read_request(socket: &mut TcpStream) -> bool {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return false,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    true
}
