//! HTTP redirect handling.
//!
//! The fetch loop follows redirects manually (the client has redirects
//! disabled) so it can enforce its own hop bound and report a missing
//! `Location` precisely.

use futures::StreamExt;
use reqwest::header::{HeaderMap, LOCATION};
use url::Url;

use crate::config::MAX_REDIRECT_DRAIN_BYTES;
use crate::error_handling::FetchError;

/// Returns `true` for any 3xx status code.
pub(crate) fn is_redirect(status: u16) -> bool {
    (300..400).contains(&status)
}

/// Resolves the `Location` of a redirect response against the current URL.
///
/// Relative locations (`/next`, `../up`, `?q=1`) are joined onto `current`;
/// absolute ones replace it.
///
/// # Errors
///
/// `MissingRedirectLocation` if the header is absent, empty or not valid
/// text, and `InvalidUrl` if it cannot be resolved.
pub(crate) fn redirect_target(
    current: &Url,
    status: u16,
    headers: &HeaderMap,
) -> Result<Url, FetchError> {
    let location = headers
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|location| !location.is_empty())
        .ok_or_else(|| FetchError::MissingRedirectLocation {
            status,
            url: current.to_string(),
        })?;

    current
        .join(location)
        .map_err(|source| FetchError::InvalidUrl {
            url: location.to_string(),
            source,
        })
}

/// Reads and throws away a redirect body so the connection can be reused.
///
/// Gives up (dropping the connection instead) after `MAX_REDIRECT_DRAIN_BYTES`
/// or on the first stream error; neither affects the fetch.
pub(crate) async fn discard_body(response: reqwest::Response) {
    let url = response.url().to_string();
    let mut stream = response.bytes_stream();
    let mut drained = 0usize;

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                drained += bytes.len();
                if drained > MAX_REDIRECT_DRAIN_BYTES {
                    log::debug!(
                        "Redirect body from {} exceeds {}KB; dropping connection",
                        url,
                        MAX_REDIRECT_DRAIN_BYTES / 1024
                    );
                    return;
                }
            }
            Err(e) => {
                log::debug!("Error draining redirect body from {}: {}", url, e);
                return;
            }
        }
    }
}
