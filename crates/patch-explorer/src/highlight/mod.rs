//! Syntax highlighting and ANSI styling.

pub mod ansi;
mod highlighter;
mod palette;

pub use highlighter::{
    extract_filename_from_header, DiffBackground, HighlightAssets, SyntaxHighlighter,
};
pub use palette::{Palette, DEFAULT_SYNTAX_THEME};
