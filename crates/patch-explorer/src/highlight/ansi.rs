//! SGR escape sequences for ratatui styles.
//!
//! The explorer hands a plain string to the host view, so styles are encoded
//! inline instead of going through a ratatui buffer.

use ratatui::style::{Color, Modifier, Style};

const RESET: &str = "\x1b[0m";

/// Wrap `text` in the escape sequence for `style`.
///
/// Returns the text untouched when the style sets nothing, and an empty
/// string for empty text.
pub fn paint(style: Style, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let codes = sgr_codes(style);
    if codes.is_empty() {
        return text.to_string();
    }

    format!("\x1b[{}m{}{}", codes.join(";"), text, RESET)
}

/// SGR parameters for a style: foreground, background, then decorations.
pub fn sgr_codes(style: Style) -> Vec<String> {
    let mut codes = Vec::new();

    if let Some(fg) = style.fg {
        codes.push(color_code(fg, false));
    }
    if let Some(bg) = style.bg {
        codes.push(color_code(bg, true));
    }

    let modifiers = style.add_modifier;
    for (modifier, code) in [
        (Modifier::BOLD, "1"),
        (Modifier::DIM, "2"),
        (Modifier::ITALIC, "3"),
        (Modifier::UNDERLINED, "4"),
        (Modifier::REVERSED, "7"),
        (Modifier::CROSSED_OUT, "9"),
    ] {
        if modifiers.contains(modifier) {
            codes.push(code.to_string());
        }
    }

    codes
}

fn color_code(color: Color, background: bool) -> String {
    let offset = if background { 10 } else { 0 };
    let basic = |n: u8| (n + offset).to_string();

    match color {
        Color::Reset => basic(39),
        Color::Black => basic(30),
        Color::Red => basic(31),
        Color::Green => basic(32),
        Color::Yellow => basic(33),
        Color::Blue => basic(34),
        Color::Magenta => basic(35),
        Color::Cyan => basic(36),
        Color::Gray => basic(37),
        Color::DarkGray => basic(90),
        Color::LightRed => basic(91),
        Color::LightGreen => basic(92),
        Color::LightYellow => basic(93),
        Color::LightBlue => basic(94),
        Color::LightMagenta => basic(95),
        Color::LightCyan => basic(96),
        Color::White => basic(97),
        Color::Rgb(r, g, b) => format!("{};2;{};{};{}", 38 + offset, r, g, b),
        Color::Indexed(i) => format!("{};5;{}", 38 + offset, i),
    }
}
