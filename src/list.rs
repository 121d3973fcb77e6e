use std::fmt;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Widget;

use crate::data::{visible_indices, Data, StringData};
use crate::enumerator::{self, Enumerator};
use crate::output;
use crate::style::Style;

/// A `List` of items which are rendered with an enumerator in front of each.
///
/// Enumerators are right aligned so the items start in the same column.
/// Hidden items are skipped and do not take an enumerator slot.
///
/// # Example
///
/// ```
/// # use tui_tree_list::{Enumerator, List};
/// let list = List::from_items(["Foo", "Bar", "Baz"]).enumerator(Enumerator::Arabic);
/// assert_eq!(list.to_string(), "1. Foo\n2. Bar\n3. Baz");
/// ```
#[derive(Debug, Clone)]
pub struct List<D = StringData> {
    data: D,
    enumerator: Enumerator,
    enumerator_style: Style,
    item_style: Style,
    /// Blank columns in front of every line
    indent: usize,
    /// Visible items skipped from the top
    offset: usize,
    /// Maximum amount of visible items. 0 means no limit.
    height: usize,
}

impl List<StringData> {
    /// Create an empty `List` with bullets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_data(StringData::default())
    }

    #[must_use]
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_data(StringData::new(items))
    }

    /// Append an item.
    #[must_use]
    pub fn item<S: Into<String>>(mut self, item: S) -> Self {
        self.data.push(item);
        self
    }

    /// Append multiple items.
    #[must_use]
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.data.push(item);
        }
        self
    }

    /// Hide the item at the (backing) `index`.
    #[must_use]
    pub fn hide(mut self, index: usize) -> Self {
        self.data.hide(index);
        self
    }

    /// Get a mutable reference to the items, for example to show hidden items again.
    pub fn data_mut(&mut self) -> &mut StringData {
        &mut self.data
    }
}

impl Default for List<StringData> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Data> List<D> {
    /// Create a `List` showing an existing data source.
    #[must_use]
    pub fn with_data(data: D) -> Self {
        Self {
            data,
            enumerator: Enumerator::Bullet,
            enumerator_style: Style::new().margin_right(1),
            item_style: Style::new(),
            indent: 0,
            offset: 0,
            height: 0,
        }
    }

    /// Replace the data source while keeping the rest of the configuration.
    #[must_use]
    pub fn data<E: Data>(self, data: E) -> List<E> {
        List {
            data,
            enumerator: self.enumerator,
            enumerator_style: self.enumerator_style,
            item_style: self.item_style,
            indent: self.indent,
            offset: self.offset,
            height: self.height,
        }
    }

    #[must_use]
    pub fn enumerator(mut self, enumerator: Enumerator) -> Self {
        self.enumerator = enumerator;
        self
    }

    /// Style of the enumerators.
    ///
    /// The default has a right margin of one column to separate the enumerator from the item.
    /// A replacement style has to bring its own spacing.
    #[must_use]
    pub fn enumerator_style(mut self, style: Style) -> Self {
        self.enumerator_style = style;
        self
    }

    #[must_use]
    pub fn item_style(mut self, style: Style) -> Self {
        self.item_style = style;
        self
    }

    #[must_use]
    pub const fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Skip this many visible items from the top.
    ///
    /// Numbering still starts at the first visible item.
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Show at most this many visible items after the offset. `0` shows all of them.
    #[must_use]
    pub const fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub const fn get_data(&self) -> &D {
        &self.data
    }

    /// Render the visible items inside the offset / height window.
    #[must_use]
    pub fn lines(&self) -> Vec<Line<'static>> {
        let visible = visible_indices(&self.data);
        let end = if self.height == 0 {
            visible.len()
        } else {
            self.offset.saturating_add(self.height).min(visible.len())
        };
        if self.offset >= end {
            tracing::debug!(
                offset = self.offset,
                height = self.height,
                visible = visible.len(),
                "list window is empty"
            );
            return Vec::new();
        }
        tracing::trace!(
            items = self.data.len(),
            visible = visible.len(),
            start = self.offset,
            end,
            "render list"
        );

        let aligned = enumerator::aligned(&self.enumerator, &self.enumerator_style, visible.len());
        let indent = " ".repeat(self.indent);
        let continuation = " ".repeat(self.indent + aligned.width);

        let mut lines = Vec::new();
        for (position, index) in visible
            .iter()
            .enumerate()
            .take(end)
            .skip(self.offset)
        {
            let text = self.data.at(*index).unwrap_or_default();
            let mut rows = output::label_lines(&text);
            let first = rows.next().unwrap_or_default();

            let mut spans = Vec::new();
            if !indent.is_empty() {
                spans.push(Span::raw(indent.clone()));
            }
            spans.extend(aligned.labels[position].iter().cloned());
            spans.extend(self.item_style.spans(first));
            lines.push(Line::from(spans));

            for row in rows {
                let mut spans = vec![Span::raw(continuation.clone())];
                spans.extend(self.item_style.spans(row));
                lines.push(Line::from(spans));
            }
        }
        lines
    }
}

impl<D: Data> fmt::Display for List<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&output::to_ansi(&self.lines()))
    }
}

impl<D: Data> From<&List<D>> for Text<'static> {
    fn from(list: &List<D>) -> Self {
        Self::from(list.lines())
    }
}

impl<D: Data> Widget for &List<D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        output::render(&self.lines(), area, buf);
    }
}
