//! Configuration and file management for the unistore demo apps
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, MatchFeedConfig};
pub use config_file::{load_config_file, ConfigFile, CONFIG_FILE};
pub use paths::{app_config_path, cache_dir};

/// Endpoint of the public football match listing
pub const DEFAULT_MATCHES_ENDPOINT: &str = "https://jsonmock.hackerrank.com/api/football_matches";

/// Listing page requested by default
pub const DEFAULT_MATCHES_PAGE: u32 = 2;
