use crate::paths::config_candidates;
use std::path::{Path, PathBuf};

/// Load config file content from CWD first, then home directory, then the
/// platform config directory
///
/// Searches for:
/// 1. `.patch-explorer.toml` in the current working directory
/// 2. `.patch-explorer.toml` in the home directory
/// 3. `patch-explorer/config.toml` in the config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    read_first(&config_candidates()).map(|(_, content)| content)
}

/// Read the first readable file among `candidates`.
pub(crate) fn read_first(candidates: &[PathBuf]) -> Option<(PathBuf, String)> {
    candidates.iter().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<(PathBuf, String)> {
    let content = std::fs::read_to_string(path).ok()?;
    log::debug!("Loaded config from {}", path.display());
    Some((path.to_path_buf(), content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_first_skips_missing_files() {
        let dir = std::env::temp_dir().join(format!("patch-explorer-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let second = dir.join("second.toml");
        let third = dir.join("third.toml");
        fs::write(&second, "[palette]\naccent = \"red\"\n").unwrap();
        fs::write(&third, "").unwrap();

        let found = read_first(&[dir.join("missing.toml"), second.clone(), third]);
        let (path, content) = found.unwrap();
        assert_eq!(path, second);
        assert!(content.contains("accent"));

        assert!(read_first(&[dir.join("missing.toml")]).is_none());
        fs::remove_dir_all(&dir).unwrap();
    }
}
