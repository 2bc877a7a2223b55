//! Crawler module for listing page retrieval and traversal
//!
//! This module contains everything that touches the network, including:
//! - HTTP client construction and page fetching
//! - `PageSource`, the lazily fetched and cached view of one listing page
//! - Single page queries for files or directories
//! - The recursive crawler building a flattened file inventory

mod fetcher;
mod page;
mod search;

pub use fetcher::{build_http_client, fetch_page};
pub use page::PageSource;
pub use search::{search_dirs, search_files, search_recursive, CrawlStats, Crawler};
