use serde::Deserialize;

/// Main configuration structure for autoindex-search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    pub timeout: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout")]
    pub connect_timeout: u64,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            timeout: 30,
            connect_timeout: 10,
            max_redirects: 10,
        }
    }
}

/// Recursive traversal configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Skip directory URLs already fetched during the same crawl.
    ///
    /// Off by default: a listing that links back to one of its ancestors then
    /// makes the crawl run forever.
    #[serde(rename = "skip-visited")]
    pub skip_visited: bool,
}
