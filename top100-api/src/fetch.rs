//! Upstream page fetching
//!
//! One shared `reqwest` client, built at startup and cloned into handlers.
//! Each request performs exactly one GET against a fixed URL: no retries,
//! no caching, no conditional requests.

use crate::error::FetchError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Browser-like User-Agent; the streaming-rankings upstream serves plain
/// clients a 403
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Per-request timeout for upstream fetches
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Build the HTTP client shared by both pipelines
pub fn build_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
}

/// Fetch one upstream page as text
///
/// Any status other than 200 is a failure, as is any transport fault
/// (DNS, timeout, connection reset).
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    debug!(url = %url, "Fetching upstream page");

    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }

    Ok(response.text().await?)
}
