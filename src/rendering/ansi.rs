//! 24-bit color escape sequences for terminal rendering.
//!
//! Everything here builds plain `String`s; nothing is written to the
//! terminal. A [run](render_run) always ends in a full reset so styling
//! never leaks into subsequent output.

use std::fmt::Write;

/// Full attribute reset.
pub const RESET: &str = "\x1b[0m";

/// Whether a color escape targets the cell background or the glyph itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ground {
    Background,
    Foreground,
}

impl Ground {
    fn prefix(self) -> &'static str {
        match self {
            Ground::Background => "\x1b[48;2;",
            Ground::Foreground => "\x1b[38;2;",
        }
    }
}

/// Text style applied on top of the colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    None,
    Bold,
    Underline,
    Strike,
}

/// Returns the escape sequence selecting `rgb` as an exact 24-bit color for
/// the given ground.
pub fn encode_color(ground: Ground, rgb: [u8; 3]) -> String {
    let mut out = String::with_capacity(19);
    // infallible on String
    let _ = write!(out, "{}{};{};{}m", ground.prefix(), rgb[0], rgb[1], rgb[2]);
    out
}

/// Returns the escape sequence for a style tag. [`Style::None`] maps to the
/// empty string.
pub fn encode_style(style: Style) -> &'static str {
    match style {
        Style::None => "",
        Style::Bold => "\x1b[1m",
        Style::Underline => "\x1b[4m",
        Style::Strike => "\x1b[9m",
    }
}

/// Composes one self-terminating styled run: background escape (if any),
/// foreground escape, style escape, the literal content, and a full reset,
/// in that order.
pub fn render_run(bg: Option<[u8; 3]>, fg: [u8; 3], style: Style, content: &str) -> String {
    let mut out = String::new();
    if let Some(bg) = bg {
        out.push_str(&encode_color(Ground::Background, bg));
    }
    out.push_str(&encode_color(Ground::Foreground, fg));
    out.push_str(encode_style(style));
    out.push_str(content);
    out.push_str(RESET);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_exact_colors_per_ground() {
        assert_eq!(
            encode_color(Ground::Background, [255, 165, 0]),
            "\x1b[48;2;255;165;0m"
        );
        assert_eq!(
            encode_color(Ground::Foreground, [0, 0, 0]),
            "\x1b[38;2;0;0;0m"
        );
    }

    #[test]
    fn none_style_is_empty() {
        assert_eq!(encode_style(Style::None), "");
        assert_eq!(encode_style(Style::Bold), "\x1b[1m");
    }

    #[test]
    fn run_orders_parts_and_always_resets() {
        let run = render_run(Some([1, 2, 3]), [4, 5, 6], Style::Underline, "ab");
        assert_eq!(run, "\x1b[48;2;1;2;3m\x1b[38;2;4;5;6m\x1b[4mab\x1b[0m");
        assert!(run.ends_with(RESET));

        // no background escape when bg is absent
        let run = render_run(None, [4, 5, 6], Style::None, "x");
        assert_eq!(run, "\x1b[38;2;4;5;6mx\x1b[0m");
    }
}
