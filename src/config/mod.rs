//! Optional settings for `apache-search`
//!
//! The tool runs without any file. When `--config` points at a TOML file,
//! its `[http]` table tunes the client (user agent, timeouts, redirect limit)
//! and its `[crawl]` table controls recursive listing. Missing keys keep
//! their defaults, and values are range-checked before use.
//!
//! ```
//! use autoindex_search::config::parse_config;
//!
//! let config = parse_config("[crawl]\nskip-visited = true\n").unwrap();
//! assert!(config.crawl.skip_visited);
//! assert_eq!(config.http.max_redirects, 10);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, HttpConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
