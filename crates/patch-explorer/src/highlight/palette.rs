//! Color configuration for the patch renderer and highlighter.

use super::DiffBackground;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Name of the built-in syntax theme used when none is configured.
pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

/// Colors used when rendering a patch.
///
/// The palette is injected by the orchestrator (usually loaded from the
/// `[palette]` table of the config file) instead of living in global state.
/// Colors deserialize from names (`"green"`) or hex strings (`"#004d24"`).
///
/// # Example
///
/// ```ignore
/// use patch_explorer::Palette;
/// use ratatui::style::Color;
///
/// let palette = Palette {
///     syntax_theme: "InspiredGitHub".to_string(),
///     addition_background: Color::Rgb(30, 60, 30),
///     ..Palette::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Syntax theme name, resolved against the built-in theme set.
    pub syntax_theme: String,
    /// Background under the code of addition lines.
    pub addition_background: Color,
    /// Background under the code of deletion lines.
    pub deletion_background: Color,
    /// Background for line-by-line selection (like vim's cursorline).
    pub selected_background: Color,
    /// Background of the marker column for lines included in a custom patch.
    pub included_background: Color,
    /// Foreground for addition lines.
    pub addition_foreground: Color,
    /// Foreground for deletion lines.
    pub deletion_foreground: Color,
    /// Foreground for context lines and header text.
    pub default_foreground: Color,
    /// Foreground for hunk markers and the selection indicator.
    pub accent: Color,
    /// Margin glyph marking selected rows in hunk/range mode.
    pub indicator: char,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            syntax_theme: DEFAULT_SYNTAX_THEME.to_string(),
            addition_background: Color::Rgb(0, 77, 36), // #004d24
            deletion_background: Color::Rgb(77, 0, 24), // #4d0018
            selected_background: Color::Rgb(60, 60, 60),
            included_background: Color::Green,
            addition_foreground: Color::Green,
            deletion_foreground: Color::Red,
            default_foreground: Color::Reset,
            accent: Color::Cyan,
            indicator: '▌',
        }
    }
}

impl Palette {
    /// Background color for a diff background class.
    pub fn background(&self, bg: DiffBackground) -> Option<Color> {
        match bg {
            DiffBackground::None => None,
            DiffBackground::Addition => Some(self.addition_background),
            DiffBackground::Deletion => Some(self.deletion_background),
            DiffBackground::Selected => Some(self.selected_background),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.syntax_theme, "base16-ocean.dark");
        assert_eq!(palette.indicator, '▌');
        assert_eq!(
            palette.background(DiffBackground::Addition),
            Some(Color::Rgb(0, 77, 36))
        );
        assert_eq!(
            palette.background(DiffBackground::Deletion),
            Some(Color::Rgb(77, 0, 24))
        );
        assert_eq!(
            palette.background(DiffBackground::Selected),
            Some(Color::Rgb(60, 60, 60))
        );
        assert_eq!(palette.background(DiffBackground::None), None);
    }
}
