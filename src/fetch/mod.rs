//! Head fetching.
//!
//! [`HeadFetcher`] issues the GET, follows redirects up to a bound, validates
//! the status and streams the 200 body into a head parser. The transfer is
//! cut off as soon as the parser has what it needs.

mod body;
mod redirects;
mod request;

use std::collections::HashMap;

use crate::config::{Config, DEFAULT_USER_AGENT, MAX_HEAD_BYTES, MAX_REDIRECT_HOPS};
use crate::error_handling::FetchError;
use crate::initialization::init_client;
use crate::models::Metadata;

use body::read_head;
use redirects::{discard_body, is_redirect, redirect_target};
use request::{build_request_headers, ensure_http_scheme, parse_http_url};

/// Per-fetcher settings that are not part of the HTTP client itself.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// `User-Agent` sent unless the caller supplies one
    pub user_agent: String,
    /// Redirect hops followed before failing with `TooManyRedirects`
    pub max_redirects: usize,
    /// Bytes buffered while waiting for `</head>`
    pub max_head_bytes: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: MAX_REDIRECT_HOPS,
            max_head_bytes: MAX_HEAD_BYTES,
        }
    }
}

impl From<&Config> for FetchOptions {
    fn from(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            max_redirects: config.max_redirects,
            max_head_bytes: config.max_head_bytes,
        }
    }
}

/// Fetches document heads and extracts their metadata.
///
/// Cheap to clone; clones share the underlying connection pool. Each call to
/// [`fetch`](HeadFetcher::fetch) owns its own parser, so concurrent calls do
/// not interfere.
#[derive(Debug, Clone)]
pub struct HeadFetcher {
    client: reqwest::Client,
    options: FetchOptions,
}

impl HeadFetcher {
    /// Builds a fetcher (and its HTTP client) from a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = init_client(config)?;
        Ok(Self::with_client(client, FetchOptions::from(config)))
    }

    /// Wraps an existing client.
    ///
    /// The client must have automatic redirects disabled
    /// (`reqwest::redirect::Policy::none()`), otherwise the redirect bound and
    /// `Location` checks are bypassed.
    pub fn with_client(client: reqwest::Client, options: FetchOptions) -> Self {
        Self { client, options }
    }

    /// The settings this fetcher was built with.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetches `url` and returns the metadata found in its `<head>`.
    ///
    /// `headers` are added to every request in the redirect chain. They may
    /// replace the default `User-Agent`; `Accept` is always `text/html`.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` / `UnsupportedScheme` / `InvalidHeader` for bad input
    /// - `MissingRedirectLocation` for a 3xx without `Location`
    /// - `TooManyRedirects` once the redirect bound is exceeded
    /// - `UnexpectedStatus` for anything other than 200 or 3xx
    /// - `Transport` for connection, TLS, timeout or body stream failures
    pub async fn fetch(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Metadata, FetchError> {
        let mut current = parse_http_url(url)?;
        let request_headers = build_request_headers(&self.options.user_agent, headers)?;
        let mut redirects = 0usize;

        loop {
            log::debug!("GET {}", current);
            let response = self
                .client
                .get(current.clone())
                .headers(request_headers.clone())
                .send()
                .await?;

            let status = response.status().as_u16();

            if status == 200 {
                return read_head(response, self.options.max_head_bytes).await;
            }

            if !is_redirect(status) {
                log::debug!("{} answered {}; not reading body", current, status);
                return Err(FetchError::UnexpectedStatus(status));
            }

            let next = redirect_target(&current, status, response.headers())?;
            discard_body(response).await;

            if redirects >= self.options.max_redirects {
                log::warn!(
                    "Giving up on {} after {} redirects (next: {})",
                    url,
                    redirects,
                    next
                );
                return Err(FetchError::TooManyRedirects {
                    max: self.options.max_redirects,
                });
            }

            ensure_http_scheme(&next)?;
            redirects += 1;
            log::debug!("{} redirect {} -> {}", status, current, next);
            current = next;
        }
    }
}

/// Fetches the `<head>` of `url` with default settings.
///
/// Builds a fresh client per call; use [`HeadFetcher`] to reuse connections
/// across many fetches.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> Result<(), seo_head::FetchError> {
/// let metadata = seo_head::fetch_head("https://example.com", None).await?;
/// println!("{:?}", metadata.title);
/// # Ok(())
/// # }
/// ```
pub async fn fetch_head(
    url: &str,
    headers: Option<&HashMap<String, String>>,
) -> Result<Metadata, FetchError> {
    HeadFetcher::new(&Config::default())?
        .fetch(url, headers)
        .await
}
