//! Config file lookup
//!
//! `.unistore-demos.toml` in the working directory shadows the one in
//! `$HOME`; both shadow `config.toml` in the platform config directory.
//! Lookup never creates directories.

use crate::paths::app_config_path;
use std::{env, path::PathBuf};

pub const CONFIG_FILE: &str = ".unistore-demos.toml";

/// A config file that was found, with its raw content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub content: String,
}

/// Locations searched for the config file, highest priority first
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    paths.extend(app_config_path());
    paths
}

/// First readable config file among [`candidate_paths`]
pub fn load_config_file() -> Option<ConfigFile> {
    first_readable(candidate_paths())
}

fn first_readable(paths: impl IntoIterator<Item = PathBuf>) -> Option<ConfigFile> {
    paths.into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        Some(ConfigFile { path, content })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("unistore-config-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_working_directory_file_comes_first() {
        let paths = candidate_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE));
        assert!(paths.iter().skip(1).all(|p| p.is_absolute()));
    }

    #[test]
    fn test_first_readable_skips_missing_files() {
        let dir = scratch_dir("lookup");
        let missing = dir.join("missing.toml");
        let present = dir.join("present.toml");
        let shadowed = dir.join("shadowed.toml");
        std::fs::write(&present, "log_level = \"info\"").unwrap();
        std::fs::write(&shadowed, "log_level = \"trace\"").unwrap();

        let found = first_readable(vec![missing, present.clone(), shadowed]).unwrap();
        assert_eq!(found.path, present);
        assert_eq!(found.content, "log_level = \"info\"");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_nothing_readable() {
        let dir = scratch_dir("empty");
        assert_eq!(first_readable(vec![dir.join("nope.toml")]), None);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
