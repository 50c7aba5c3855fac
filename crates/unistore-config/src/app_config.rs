//! Application configuration
//!
//! Configuration loaded from `.unistore-demos.toml`.

use crate::{ConfigFile, DEFAULT_MATCHES_ENDPOINT, DEFAULT_MATCHES_PAGE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Football match feed used by the match browser
    #[serde(default)]
    pub matches: MatchFeedConfig,
}

/// Location of the football match listing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MatchFeedConfig {
    /// Listing URL without query string
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Page requested from the listing
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_MATCHES_ENDPOINT.to_string()
}

fn default_page() -> u32 {
    DEFAULT_MATCHES_PAGE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            matches: MatchFeedConfig::default(),
        }
    }
}

impl Default for MatchFeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            page: default_page(),
        }
    }
}

impl AppConfig {
    /// Load the first config file found, or defaults if there is none
    ///
    /// A file that exists but does not parse is an error, so the caller can
    /// report it once logging is up and then fall back to defaults.
    pub fn load() -> Result<Self> {
        match crate::load_config_file() {
            Some(file) => Self::from_file(&file),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(file: &ConfigFile) -> Result<Self> {
        Self::parse(&file.content)
            .with_context(|| format!("Failed to parse config file {}", file.path.display()))
    }

    /// Parse config content; missing fields take their defaults
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.matches.endpoint, DEFAULT_MATCHES_ENDPOINT);
        assert_eq!(config.matches.page, 2);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            log_level = "warn"

            [matches]
            endpoint = "http://localhost:8080/matches"
            page = 5
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.matches.endpoint, "http://localhost:8080/matches");
        assert_eq!(config.matches.page, 5);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            [matches]
            page = 1
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.matches.page, 1);
        // Other fields should use defaults
        assert_eq!(config.matches.endpoint, DEFAULT_MATCHES_ENDPOINT);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_config_is_reported_with_its_path() {
        let file = ConfigFile {
            path: PathBuf::from("/tmp/.unistore-demos.toml"),
            content: "matches = [\n".to_string(),
        };

        let err = AppConfig::from_file(&file).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Failed to parse config file /tmp/.unistore-demos.toml"));
    }

    #[test]
    fn test_valid_file_is_parsed() {
        let file = ConfigFile {
            path: PathBuf::from(".unistore-demos.toml"),
            content: "log_level = \"info\"".to_string(),
        };

        let config = AppConfig::from_file(&file).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.matches, MatchFeedConfig::default());
    }
}
