//! URL handling module for autoindex-search
//!
//! Listing pages name their entries relative to the page itself; this module
//! turns those names into absolute URLs.

mod join;

pub use join::{as_directory, join_url};

use crate::{Result, SearchError};
use url::Url;

/// Parses a user-supplied listing URL, accepting only HTTP and HTTPS
pub fn parse_listing_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim())?;

    if matches!(url.scheme(), "http" | "https") {
        return Ok(url);
    }

    Err(SearchError::InvalidScheme(format!(
        "only http and https listings are supported, got: {}",
        url.scheme()
    )))
}
