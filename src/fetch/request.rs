//! Request URL validation and header building.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use url::Url;

use crate::config::ACCEPT_HTML;
use crate::error_handling::FetchError;

/// Parses a URL and checks that it can be fetched over HTTP(S).
pub(crate) fn parse_http_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|source| FetchError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    ensure_http_scheme(&url)?;
    Ok(url)
}

/// Rejects anything but `http` and `https`.
pub(crate) fn ensure_http_scheme(url: &Url) -> Result<(), FetchError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

/// Builds the headers sent with every request of a fetch.
///
/// Layering, last write wins:
/// 1. `User-Agent` default
/// 2. caller headers (may replace `User-Agent`)
/// 3. `Accept: text/html`, which callers cannot override
pub(crate) fn build_request_headers(
    user_agent: &str,
    extra: Option<&HashMap<String, String>>,
) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();

    let user_agent = HeaderValue::from_str(user_agent)
        .map_err(|_| FetchError::InvalidHeader(USER_AGENT.to_string()))?;
    headers.insert(USER_AGENT, user_agent);

    for (name, value) in extra.into_iter().flatten() {
        let header_name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader(name.clone()))?;
        headers.insert(header_name, header_value);
    }

    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

    Ok(headers)
}
