use std::fmt;
use std::sync::Arc;

use ratatui::text::Span;

use crate::ansi;

type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How a piece of text (an enumerator, an item or a root label) is displayed.
///
/// A `Style` optionally transforms the text, surrounds it with unstyled margins and paints it with colors and modifiers.
/// It implements [`Styled`](ratatui::style::Styled) so the [`Stylize`](ratatui::style::Stylize) shortcuts work on it.
///
/// # Example
///
/// ```
/// # use ratatui::style::Stylize;
/// # use tui_tree_list::Style;
/// let style = Style::new()
///     .margin_right(1)
///     .transform(|text| text.replace('.', ")"))
///     .bold();
/// assert_eq!(style.width("1."), 3);
/// assert_eq!(style.apply("1."), "\x1b[1m1)\x1b[0m ");
/// ```
#[derive(Clone, Default)]
pub struct Style {
    paint: ratatui::style::Style,
    margin_left: usize,
    margin_right: usize,
    transform: Option<Transform>,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paint: ratatui::style::Style::new(),
            margin_left: 0,
            margin_right: 0,
            transform: None,
        }
    }

    /// Blank columns in front of the text.
    #[must_use]
    pub const fn margin_left(mut self, columns: usize) -> Self {
        self.margin_left = columns;
        self
    }

    /// Blank columns after the text.
    #[must_use]
    pub const fn margin_right(mut self, columns: usize) -> Self {
        self.margin_right = columns;
        self
    }

    /// Rewrite the text before it is displayed.
    #[must_use]
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Colors and modifiers of the text. Margins are never painted.
    #[must_use]
    pub const fn paint(mut self, paint: ratatui::style::Style) -> Self {
        self.paint = paint;
        self
    }

    /// Render `text` into a string, painted with ANSI escape sequences.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut result = String::new();
        for span in self.spans(text) {
            ansi::paint(&span.content, span.style, &mut result);
        }
        result
    }

    /// Columns the rendered `text` takes on a terminal.
    ///
    /// This is the width alignment is calculated with.
    #[must_use]
    pub fn width(&self, text: &str) -> usize {
        self.margin_left + ansi::display_width(&self.transformed(text)) + self.margin_right
    }

    /// Render `text` as spans. Margins become unstyled spans of spaces.
    pub(crate) fn spans(&self, text: &str) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(3);
        if self.margin_left > 0 {
            spans.push(Span::raw(" ".repeat(self.margin_left)));
        }
        spans.push(Span::styled(self.transformed(text), self.paint));
        if self.margin_right > 0 {
            spans.push(Span::raw(" ".repeat(self.margin_right)));
        }
        spans
    }

    fn transformed(&self, text: &str) -> String {
        self.transform
            .as_ref()
            .map_or_else(|| text.to_owned(), |transform| transform(text))
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("paint", &self.paint)
            .field("margin_left", &self.margin_left)
            .field("margin_right", &self.margin_right)
            .field("transform", &self.transform.as_ref().map(|_| ".."))
            .finish()
    }
}

impl ratatui::style::Styled for Style {
    type Item = Self;

    fn style(&self) -> ratatui::style::Style {
        self.paint
    }

    fn set_style<S: Into<ratatui::style::Style>>(mut self, style: S) -> Self::Item {
        self.paint = style.into();
        self
    }
}

#[test]
fn plain_style_keeps_text() {
    let style = Style::new();
    assert_eq!(style.apply("Foo"), "Foo");
    assert_eq!(style.width("Foo"), 3);
}

#[test]
fn margins_add_blank_columns() {
    let style = Style::new().margin_left(2).margin_right(1);
    assert_eq!(style.apply("•"), "  • ");
    assert_eq!(style.width("•"), 4);
}

#[test]
fn transform_is_measured() {
    let style = Style::new().transform(|text| text.replace('─', "───"));
    assert_eq!(style.apply("├─"), "├───");
    assert_eq!(style.width("├─"), 4);
}

#[test]
fn stylize_paints_without_changing_width() {
    use ratatui::style::Stylize;
    let style = Style::new().margin_right(1).red();
    assert_eq!(style.apply("A."), "\x1b[31mA.\x1b[0m ");
    assert_eq!(style.width("A."), 3);
}
