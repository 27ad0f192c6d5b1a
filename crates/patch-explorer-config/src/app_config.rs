//! Explorer configuration
//!
//! Configuration loaded from .patch-explorer.toml file.

use anyhow::{Context, Result};
use patch_explorer::{HighlightAssets, Palette};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Explorer configuration loaded from .patch-explorer.toml
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Colors and syntax theme for rendering patches
    #[serde(default)]
    pub palette: Palette,
}

impl ExplorerConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded explorer config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default explorer config");
        Self::default()
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse explorer config")
    }

    /// Syntax and theme assets for the configured palette
    pub fn highlight_assets(&self) -> HighlightAssets {
        HighlightAssets::new(self.palette.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert_eq!(config.palette, Palette::default());
        assert_eq!(config.palette.addition_background, Color::Rgb(0, 77, 36));
        assert_eq!(config.palette.indicator, '▌');
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r##"
            [palette]
            syntax_theme = "InspiredGitHub"
            addition_background = "#102030"
            accent = "magenta"
            indicator = ">"
        "##;
        let config = ExplorerConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.palette.syntax_theme, "InspiredGitHub");
        assert_eq!(config.palette.addition_background, Color::Rgb(16, 32, 48));
        assert_eq!(config.palette.accent, Color::Magenta);
        assert_eq!(config.palette.indicator, '>');
        // deletion_background should use default
        assert_eq!(config.palette.deletion_background, Color::Rgb(77, 0, 24));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = ExplorerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ExplorerConfig::default());

        let toml = r#"
            [palette]
            deletion_foreground = "lightred"
        "#;
        let config = ExplorerConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.palette.deletion_foreground, Color::LightRed);
        // Other fields should use defaults
        assert_eq!(config.palette.addition_foreground, Color::Green);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = ExplorerConfig::from_toml_str("[palette]\naccent = 3").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse explorer config"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = ExplorerConfig::load_from(Path::new("/nonexistent/patch-explorer.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_highlight_assets_use_palette() {
        let toml = r#"
            [palette]
            syntax_theme = "no-such-theme"
        "#;
        let config = ExplorerConfig::from_toml_str(toml).unwrap();
        let assets = config.highlight_assets();
        assert_eq!(assets.palette(), &config.palette);
        // Unknown themes fall back to the default theme.
        assert!(assets.theme_name().is_some());
    }
}
