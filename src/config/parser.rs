use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use autoindex_search::config::load_config;
///
/// let config = load_config(Path::new("apache-search.toml")).unwrap();
/// println!("Timeout: {}s", config.http.timeout);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the configuration file if one was given, otherwise the defaults
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[http]
user-agent = "TestAgent/1.0"
timeout = 15
connect-timeout = 5
max-redirects = 3

[crawl]
skip-visited = true
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.http.user_agent, "TestAgent/1.0");
        assert_eq!(config.http.timeout, 15);
        assert_eq!(config.http.connect_timeout, 5);
        assert_eq!(config.http.max_redirects, 3);
        assert!(config.crawl.skip_visited);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = create_temp_config("[http]\ntimeout = 45\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.http.timeout, 45);
        assert_eq!(config.http.connect_timeout, 10);
        assert!(!config.crawl.skip_visited);
        assert!(config.http.user_agent.starts_with("autoindex-search/"));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config.http.timeout, 30);
        assert_eq!(config.http.max_redirects, 10);
        assert!(!config.crawl.skip_visited);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/apache-search.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[http]\ntimeout = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_config_or_default_without_path() {
        let config = load_config_or_default(None).unwrap();
        assert_eq!(config.http.timeout, 30);
    }
}
