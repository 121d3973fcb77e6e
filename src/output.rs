use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::ansi;

/// Lines of a label. An empty label is one empty line.
pub(crate) fn label_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Join rendered lines with `\n`, painting styled spans with ANSI escape sequences.
///
/// There is no trailing newline.
pub(crate) fn to_ansi(lines: &[Line<'_>]) -> String {
    let mut result = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            result.push('\n');
        }
        for span in &line.spans {
            ansi::paint(&span.content, span.style, &mut result);
        }
    }
    result
}

/// Write the lines top to bottom into `area`. Lines below the area are dropped.
pub(crate) fn render(lines: &[Line<'_>], area: Rect, buf: &mut Buffer) {
    if area.width < 1 || area.height < 1 {
        return;
    }
    for (line, y) in lines.iter().zip(area.top()..area.bottom()) {
        buf.set_line(area.x, y, line, area.width);
    }
}

#[test]
fn label_lines_split_on_newlines() {
    let lines = label_lines("Foo\r\nBar\nBaz").collect::<Vec<_>>();
    assert_eq!(lines, ["Foo", "Bar", "Baz"]);
    assert_eq!(label_lines("").collect::<Vec<_>>(), [""]);
}

#[test]
fn to_ansi_has_no_trailing_newline() {
    let lines = vec![Line::raw("a"), Line::raw("b")];
    assert_eq!(to_ansi(&lines), "a\nb");
    assert_eq!(to_ansi(&[]), "");
}

#[test]
fn render_clips_to_area() {
    let lines = vec![Line::raw("Foo"), Line::raw("Bar"), Line::raw("Baz")];
    let area = Rect::new(0, 0, 2, 2);
    let mut buffer = Buffer::empty(area);
    render(&lines, area, &mut buffer);
    assert_eq!(buffer, Buffer::with_lines(["Fo", "Ba"]));
}
