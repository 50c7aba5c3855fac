//! Configuration and cache paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/unistore-demos/`, `~/.cache/unistore-demos/`
//! - macOS: `~/Library/Application Support/unistore-demos/`, `~/Library/Caches/unistore-demos/`
//! - Windows: `%APPDATA%\unistore-demos\`, `%LOCALAPPDATA%\unistore-demos\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "unistore-demos";

/// Get the application cache directory, creating it if needed
///
/// Log files are written here in release builds.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// `config.toml` in the application config directory
///
/// Only computes the path; nothing is created.
pub fn app_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path() {
        if let Some(path) = app_config_path() {
            assert!(path.ends_with("config.toml"));
            assert!(path.parent().unwrap().ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }
}
