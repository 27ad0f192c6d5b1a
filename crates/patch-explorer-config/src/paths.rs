//! Configuration file locations
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/patch-explorer/`
//! - macOS: `~/Library/Application Support/patch-explorer/`
//! - Windows: `%APPDATA%\patch-explorer\`

use anyhow::{Context, Result};
use std::{env, path::PathBuf};

const APP_NAME: &str = "patch-explorer";

/// Name of the config file in the working and home directories.
pub const CONFIG_FILE: &str = ".patch-explorer.toml";

/// Get the application config directory
/// Returns ~/.config/patch-explorer/ on Linux
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.patch-explorer.toml if HOME environment variable is set.
pub fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

/// Config file locations, in the order they are searched.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    candidates.extend(home_config_path());
    match config_dir() {
        Ok(dir) => candidates.push(dir.join("config.toml")),
        Err(e) => log::debug!("Skipping config directory: {}", e),
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_start_with_working_directory() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
        assert!(candidates
            .iter()
            .skip(1)
            .all(|path| path.is_absolute() || path.ends_with(CONFIG_FILE)));
    }
}
