//! autoindex-search: file and directory listings from autoindex pages
//!
//! This crate reads the directory listing pages that HTTP file servers
//! (Apache httpd `mod_autoindex` and friends) generate, separates file rows
//! from directory rows, and extracts typed fields from them. It can also walk
//! a whole directory tree and return a flattened file inventory.

pub mod config;
pub mod crawler;
pub mod listing;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for autoindex-search operations
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Can not connect to: {url}. Status code: {status}")]
    Connection { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Short name of the failure kind, used for one-line diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "ConfigError",
            Self::Connection { .. } => "ConnectionError",
            Self::Http { .. } => "HttpError",
            Self::Client(_) => "ClientError",
            Self::UrlParse(_) | Self::InvalidScheme(_) => "UrlError",
            Self::Io(_) => "IoError",
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for autoindex-search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{search_dirs, search_files, search_recursive, Crawler, PageSource};
pub use listing::{DirectoryRecord, FileRecord, Record};
