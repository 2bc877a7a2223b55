//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests, including:
//! - Building the HTTP client from configuration
//! - GET requests for listing pages
//! - Mapping transport failures and non-200 statuses to errors
//!
//! Failures are never retried here; the caller decides what a failed page
//! means for the operation as a whole.

use crate::config::HttpConfig;
use crate::{Result, SearchError};
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(SearchError::Client)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use autoindex_search::config::HttpConfig;
/// use autoindex_search::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(SearchError::Client)
}

/// Fetches a listing page and returns its body
///
/// # Response handling
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 | Body text |
/// | Any other status | `SearchError::Connection` with URL and status |
/// | Connection refused, DNS, timeout | `SearchError::Http` with URL |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| SearchError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::debug!("{} answered with status {}", url, status);
        return Err(SearchError::Connection {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| SearchError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("Fetched {} ({} bytes)", url, body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&HttpConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_http_client_without_redirects() {
        let config = HttpConfig {
            max_redirects: 0,
            ..HttpConfig::default()
        };
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_connection_error_message() {
        let error = SearchError::Connection {
            url: "https://test/url/".to_string(),
            status: 404,
        };
        assert_eq!(
            error.to_string(),
            "Can not connect to: https://test/url/. Status code: 404"
        );
        assert_eq!(error.kind(), "ConnectionError");
    }

    // Fetches against live responses are covered with wiremock in tests/
}
