//! Streaming a 200 response body into the head parser.

use futures::StreamExt;

use crate::error_handling::FetchError;
use crate::models::Metadata;
use crate::parse::{HeadParser, Progress};

/// Feeds the response body into a fresh [`HeadParser`] until it completes.
///
/// Stops reading as soon as the parser reports the head is complete; the
/// remainder of the document is never downloaded. A transport error
/// mid-stream fails the fetch.
pub(crate) async fn read_head(
    response: reqwest::Response,
    max_head_bytes: usize,
) -> Result<Metadata, FetchError> {
    let url = response.url().to_string();
    let mut parser = HeadParser::with_limit(max_head_bytes);
    let mut stream = response.bytes_stream();
    let mut received = 0usize;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        received += chunk.len();

        if parser.push(&chunk) == Progress::Complete {
            log::debug!(
                "Head of {} complete after {} bytes; aborting transfer",
                url,
                received
            );
            break;
        }
    }

    // Dropping the stream aborts the rest of the transfer.
    drop(stream);

    if !parser.is_done() {
        log::debug!("Body of {} ended after {} bytes", url, received);
    }

    Ok(parser.finish())
}
