//! Syntax highlighter using syntect, emitting ANSI styled text.

use super::ansi::paint;
use super::palette::{Palette, DEFAULT_SYNTAX_THEME};
use log::debug;
use ratatui::style::{Color, Modifier, Style};
use std::path::Path;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color as SyntectColor, FontStyle, Style as SyntectStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Background classification for the code part of a diff line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiffBackground {
    /// No background.
    #[default]
    None,
    /// Subtle green for added lines.
    Addition,
    /// Subtle red for removed lines.
    Deletion,
    /// Subtle gray for line-by-line selection.
    Selected,
}

/// Syntax definitions, the resolved theme and the palette.
///
/// Loading syntect's defaults is expensive, so an explorer loads these once
/// and hands out cheap per-file [`SyntaxHighlighter`]s.
pub struct HighlightAssets {
    /// Syntax definitions.
    syntax_set: SyntaxSet,
    /// Resolved theme.
    theme: Theme,
    /// Injected colors.
    palette: Palette,
}

impl std::fmt::Debug for HighlightAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightAssets")
            .field("syntaxes", &self.syntax_set.syntaxes().len())
            .field("theme", &self.theme.name)
            .field("palette", &self.palette)
            .finish()
    }
}

impl Default for HighlightAssets {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl HighlightAssets {
    /// Load the built-in syntaxes and resolve the palette's theme.
    ///
    /// An unknown theme name falls back to the default theme.
    pub fn new(palette: Palette) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let mut theme_set = ThemeSet::load_defaults();

        let theme = match theme_set.themes.remove(&palette.syntax_theme) {
            Some(theme) => theme,
            None => {
                debug!(
                    "Unknown syntax theme {:?}, falling back to {}",
                    palette.syntax_theme, DEFAULT_SYNTAX_THEME
                );
                theme_set
                    .themes
                    .remove(DEFAULT_SYNTAX_THEME)
                    .unwrap_or_default()
            }
        };

        Self {
            syntax_set,
            theme,
            palette,
        }
    }

    /// The injected palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Name of the resolved theme.
    pub fn theme_name(&self) -> Option<&str> {
        self.theme.name.as_deref()
    }

    /// Create a highlighter for a file name.
    ///
    /// Never fails: files without a matching syntax get plain text.
    pub fn highlighter_for(&self, filename: &str) -> SyntaxHighlighter<'_> {
        let syntax = self.find_syntax(filename);

        SyntaxHighlighter {
            syntax_set: &self.syntax_set,
            syntax,
            theme: &self.theme,
            palette: &self.palette,
            default_foreground: self.theme.settings.foreground.unwrap_or(SyntectColor::BLACK),
        }
    }

    /// Look up a syntax by extension, then by whole file name (`Makefile`).
    fn find_syntax(&self, filename: &str) -> &SyntaxReference {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        self.syntax_set
            .find_syntax_by_extension(extension)
            .or_else(|| self.syntax_set.find_syntax_by_extension(filename))
            .unwrap_or_else(|| {
                debug!("No syntax for {:?}, using plain text", filename);
                self.syntax_set.find_syntax_plain_text()
            })
    }
}

/// Highlights lines of one file.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter<'a> {
    syntax_set: &'a SyntaxSet,
    syntax: &'a SyntaxReference,
    theme: &'a Theme,
    palette: &'a Palette,
    /// Foreground the theme uses for unscoped text.
    default_foreground: SyntectColor,
}

impl SyntaxHighlighter<'_> {
    /// Name of the selected syntax (e.g. "Go", "Plain Text").
    pub fn syntax_name(&self) -> &str {
        &self.syntax.name
    }

    /// Highlight a line without a diff background.
    pub fn highlight_line(&self, code: &str) -> String {
        self.highlight_line_with_background(code, DiffBackground::None)
    }

    /// Highlight a line and apply a diff background to every token.
    ///
    /// Falls back to background-only styling if tokenizing fails.
    pub fn highlight_line_with_background(&self, code: &str, bg: DiffBackground) -> String {
        if code.is_empty() {
            return self.apply_background_only(code, bg);
        }

        // The syntax set is built for newline-terminated lines.
        let line = format!("{}\n", code);
        let mut highlighter = HighlightLines::new(self.syntax, self.theme);
        let tokens = match highlighter.highlight_line(&line, self.syntax_set) {
            Ok(tokens) => tokens,
            Err(err) => {
                debug!("Tokenizing failed ({}), using background only", err);
                return self.apply_background_only(code, bg);
            }
        };

        let background = self.palette.background(bg);
        let mut buf = String::with_capacity(line.len() * 2);
        for (token_style, text) in tokens {
            let text = text.trim_end_matches('\n');
            if text.is_empty() {
                continue;
            }
            buf.push_str(&self.format_token(text, token_style, background));
        }

        buf
    }

    /// Combine the token's syntax foreground with the diff background.
    fn format_token(&self, text: &str, token_style: SyntectStyle, bg: Option<Color>) -> String {
        let mut style = Style::default();

        let fg = token_style.foreground;
        if fg != self.default_foreground {
            style = style.fg(Color::Rgb(fg.r, fg.g, fg.b));
        }
        if let Some(bg) = bg {
            style = style.bg(bg);
        }

        let font = token_style.font_style;
        if font.contains(FontStyle::BOLD) {
            style = style.add_modifier(Modifier::BOLD);
        }
        if font.contains(FontStyle::ITALIC) {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if font.contains(FontStyle::UNDERLINE) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        paint(style, text)
    }

    fn apply_background_only(&self, text: &str, bg: DiffBackground) -> String {
        match self.palette.background(bg) {
            Some(color) => paint(Style::default().bg(color), text),
            None => text.to_string(),
        }
    }
}

/// Extract the file name from a patch header.
///
/// Prefers the `+++ b/path` line (skipping `/dev/null`), then falls back to
/// the last path of a `diff --git a/path b/path` line. Returns `None` when
/// neither yields a name.
pub fn extract_filename_from_header(header: &[String]) -> Option<String> {
    let base_name = |path: &str| {
        let path = path.strip_prefix("b/").unwrap_or(path);
        Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
    };

    for line in header {
        if let Some(path) = line.strip_prefix("+++ ") {
            if path == "/dev/null" {
                continue;
            }
            if let Some(name) = base_name(path) {
                return Some(name);
            }
        }
    }

    for line in header {
        if line.starts_with("diff --git ") {
            let parts: Vec<&str> = line.split(' ').collect();
            if parts.len() >= 4 {
                return base_name(parts[parts.len() - 1]);
            }
        }
    }

    None
}
