//! ANSI escape sequences: measuring text that contains them and painting text with them.

use std::borrow::Cow;
use std::fmt::Write as _;

use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

const ESC: u8 = 0x1B;

/// Columns `text` occupies on a terminal.
///
/// ANSI escape sequences do not count towards the width.
#[must_use]
pub fn display_width(text: &str) -> usize {
    strip(text).width()
}

/// Remove ANSI escape sequences.
///
/// Borrows when there is nothing to remove.
pub(crate) fn strip(text: &str) -> Cow<'_, str> {
    if !text.as_bytes().contains(&ESC) {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == ESC {
            i = skip_sequence(bytes, i);
        } else {
            // ESC is ASCII, slicing at it never splits a UTF-8 sequence
            let start = i;
            while i < bytes.len() && bytes[i] != ESC {
                i += 1;
            }
            result.push_str(&text[start..i]);
        }
    }
    Cow::Owned(result)
}

/// Index after the sequence starting with ESC at `pos`.
fn skip_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    match bytes.get(next) {
        None => bytes.len(),
        Some(b'[') => skip_csi(bytes, next + 1),
        Some(b']' | b'P' | b'^' | b'_') => skip_string(bytes, next + 1),
        Some(_) => next + 1,
    }
}

/// CSI: parameter and intermediate bytes followed by a final byte in `0x40..=0x7E`.
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
        i += 1;
    }
    bytes.len()
}

/// OSC, DCS, PM and APC end with BEL or `ESC \`.
fn skip_string(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Wrap `text` in SGR sequences for `style`.
///
/// Text stays untouched when the style sets neither colors nor modifiers.
pub(crate) fn paint(text: &str, style: Style, out: &mut String) {
    let codes = sgr_codes(style);
    if codes.is_empty() || text.is_empty() {
        out.push_str(text);
        return;
    }
    let _ = write!(out, "\x1b[{}m{text}\x1b[0m", codes.join(";"));
}

fn sgr_codes(style: Style) -> Vec<String> {
    const MODIFIERS: [(Modifier, &str); 9] = [
        (Modifier::BOLD, "1"),
        (Modifier::DIM, "2"),
        (Modifier::ITALIC, "3"),
        (Modifier::UNDERLINED, "4"),
        (Modifier::SLOW_BLINK, "5"),
        (Modifier::RAPID_BLINK, "6"),
        (Modifier::REVERSED, "7"),
        (Modifier::HIDDEN, "8"),
        (Modifier::CROSSED_OUT, "9"),
    ];

    let modifier = style.add_modifier - style.sub_modifier;
    let mut codes = MODIFIERS
        .iter()
        .filter(|(flag, _)| modifier.contains(*flag))
        .map(|(_, code)| (*code).to_owned())
        .collect::<Vec<_>>();
    if let Some(fg) = style.fg {
        codes.push(color_code(fg, false));
    }
    if let Some(bg) = style.bg {
        codes.push(color_code(bg, true));
    }
    codes
}

fn color_code(color: Color, background: bool) -> String {
    let offset = if background { 10 } else { 0 };
    let basic = |code: u8| (code + offset).to_string();
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
        Color::Rgb(r, g, b) => format!("{};2;{r};{g};{b}", 38 + offset),
        Color::Indexed(index) => format!("{};5;{index}", 38 + offset),
    }
}

#[test]
fn strip_borrows_plain_text() {
    assert!(matches!(strip("plain"), Cow::Borrowed("plain")));
}

#[test]
fn strip_removes_csi_and_osc() {
    assert_eq!(strip("\x1b[1;31mred\x1b[0m"), "red");
    assert_eq!(strip("\x1b]8;;https://example.org\x07link\x1b]8;;\x1b\\"), "link");
    assert_eq!(strip("dangling\x1b"), "dangling");
}

#[test]
fn width_ignores_escapes_and_counts_wide_chars() {
    assert_eq!(display_width("\x1b[32mFoo\x1b[0m"), 3);
    assert_eq!(display_width("├──"), 3);
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn paint_plain_style_is_identity() {
    let mut out = String::new();
    paint("Foo", Style::new(), &mut out);
    assert_eq!(out, "Foo");
}

#[test]
fn paint_emits_sgr() {
    let mut out = String::new();
    paint(
        "Foo",
        Style::new()
            .fg(Color::Indexed(99))
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        &mut out,
    );
    assert_eq!(out, "\x1b[1;38;5;99;44mFoo\x1b[0m");
    assert_eq!(display_width(&out), 3);
}
