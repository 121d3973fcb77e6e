use std::fmt;
use std::sync::Arc;

use ratatui::text::Span;

use crate::numeral;
use crate::style::Style;

type EnumeratorFn = Arc<dyn Fn(usize, usize) -> String + Send + Sync>;

/// Creates the label in front of every visible list item or tree node.
///
/// The label is created from the number of visible siblings and the zero based index among them.
/// Hidden siblings are not counted.
#[derive(Clone, Default)]
pub enum Enumerator {
    /// `•` for every item.
    #[default]
    Bullet,
    /// `1.`, `2.`, `3.`, …
    Arabic,
    /// `A.`, `B.`, …, `Z.`, `AA.`, …
    Alphabet,
    /// `I.`, `II.`, `III.`, …
    Roman,
    /// `├─` for every item but the last, which gets `└─`.
    Tree,
    /// `├──` for every node but the last, which gets `└──`.
    ///
    /// Default of a [`Tree`](crate::Tree).
    Branch,
    Custom(EnumeratorFn),
}

impl Enumerator {
    /// Use a custom function with the arguments `(count, index)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use tui_tree_list::Enumerator;
    /// let dash = Enumerator::custom(|_, _| "-".to_owned());
    /// assert_eq!(dash.label(3, 1), "-");
    /// ```
    #[must_use]
    pub fn custom<F>(function: F) -> Self
    where
        F: Fn(usize, usize) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(function))
    }

    /// Label for the item at `index` of `count` visible items.
    #[must_use]
    pub fn label(&self, count: usize, index: usize) -> String {
        let is_last = index + 1 >= count;
        match self {
            Self::Bullet => "•".to_owned(),
            Self::Arabic => format!("{}.", index + 1),
            Self::Alphabet => format!("{}.", numeral::alphabet(index)),
            Self::Roman => format!("{}.", numeral::roman(index)),
            Self::Tree if is_last => "└─".to_owned(),
            Self::Tree => "├─".to_owned(),
            Self::Branch if is_last => "└──".to_owned(),
            Self::Branch => "├──".to_owned(),
            Self::Custom(function) => function(count, index),
        }
    }
}

impl fmt::Debug for Enumerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullet => f.write_str("Bullet"),
            Self::Arabic => f.write_str("Arabic"),
            Self::Alphabet => f.write_str("Alphabet"),
            Self::Roman => f.write_str("Roman"),
            Self::Tree => f.write_str("Tree"),
            Self::Branch => f.write_str("Branch"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Styled enumerator labels of a group of siblings, right aligned to the widest one.
pub(crate) struct Aligned {
    pub labels: Vec<Vec<Span<'static>>>,
    pub width: usize,
}

pub(crate) fn aligned(enumerator: &Enumerator, style: &Style, count: usize) -> Aligned {
    let mut labels = Vec::with_capacity(count);
    let mut widths = Vec::with_capacity(count);
    for index in 0..count {
        let label = enumerator.label(count, index);
        widths.push(style.width(&label));
        labels.push(style.spans(&label));
    }

    let width = widths.iter().copied().max().unwrap_or(0);
    for (spans, label_width) in labels.iter_mut().zip(widths) {
        if label_width < width {
            spans.insert(0, Span::raw(" ".repeat(width - label_width)));
        }
    }
    Aligned { labels, width }
}

#[cfg(test)]
fn plain(spans: &[Span]) -> String {
    spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn builtin_labels() {
    assert_eq!(Enumerator::Bullet.label(3, 2), "•");
    assert_eq!(Enumerator::Arabic.label(3, 2), "3.");
    assert_eq!(Enumerator::Alphabet.label(30, 26), "AA.");
    assert_eq!(Enumerator::Roman.label(3, 2), "III.");
}

#[test]
fn connectors_depend_on_last() {
    let labels = (0..3)
        .map(|index| Enumerator::Tree.label(3, index))
        .collect::<Vec<_>>();
    assert_eq!(labels, ["├─", "├─", "└─"]);
    assert_eq!(Enumerator::Branch.label(1, 0), "└──");
    assert_eq!(Enumerator::Branch.label(2, 0), "├──");
}

#[test]
fn aligned_pads_in_front() {
    let aligned = aligned(&Enumerator::Roman, &Style::new().margin_right(1), 3);
    assert_eq!(aligned.width, 5);
    let labels = aligned.labels.iter().map(|spans| plain(spans)).collect::<Vec<_>>();
    assert_eq!(labels, ["  I. ", " II. ", "III. "]);
}

#[test]
fn aligned_uses_transformed_width() {
    let style = Style::new().transform(|text| format!("({}) ", text.trim_end_matches('.')));
    let aligned = aligned(&Enumerator::Arabic, &style, 10);
    assert_eq!(aligned.width, 5);
    assert_eq!(plain(&aligned.labels[0]), " (1) ");
    assert_eq!(plain(&aligned.labels[9]), "(10) ");
}

#[test]
fn aligned_nothing_is_empty() {
    let aligned = aligned(&Enumerator::Arabic, &Style::new(), 0);
    assert!(aligned.labels.is_empty());
    assert_eq!(aligned.width, 0);
}
