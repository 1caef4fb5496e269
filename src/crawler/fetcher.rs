//! HTTP fetcher implementation
//!
//! This module issues all HTTP requests for the crawler:
//! - Building the HTTP client with a descriptive user agent
//! - GET requests for pages with a fixed timeout
//! - Shorter-timeout probes for sitemaps, robots.txt and official files
//! - Error classification into typed failures
//!
//! The fetcher never caches across calls; every fetch is an independent
//! network request.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Timeout for ordinary page fetches
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for best-effort probes (sitemap candidates, robots.txt,
/// official llms.txt files)
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the HTTP client used for all fetches
///
/// The user agent identifies the tool and its version so that site operators
/// can attribute the traffic.
///
/// # Example
///
/// ```no_run
/// use llmsgen::crawler::build_http_client;
///
/// let client = build_http_client().unwrap();
/// ```
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "llmsgen/{} (+https://github.com/llmsgen/llmsgen)",
        env!("CARGO_PKG_VERSION")
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(PAGE_TIMEOUT)
        .connect_timeout(Duration::from_secs(5))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body with the standard page timeout
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Timeout, network failure, or non-2xx status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    fetch_with_timeout(client, url, PAGE_TIMEOUT).await
}

/// Fetches a URL with an explicit per-request timeout
///
/// A timed-out fetch is classified identically to a network error from the
/// caller's perspective: both are typed failures that best-effort callers
/// skip and continue past.
pub async fn fetch_with_timeout(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

/// Classifies a reqwest error into a typed fetch failure
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}
