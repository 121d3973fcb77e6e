use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// Items of a [`List`](crate::List).
///
/// A data source is an indexable sequence which can hide some of its indices.
/// Hidden indices are neither rendered nor enumerated.
pub trait Data {
    /// Text of the item at `index`. `None` when out of bounds.
    fn at(&self, index: usize) -> Option<Cow<'_, str>>;

    /// Amount of items including the hidden ones.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_hidden(&self, _index: usize) -> bool {
        false
    }
}

/// Owned strings with a set of hidden indices.
///
/// Hiding an item keeps it in the backing sequence so it can be shown again later.
///
/// # Example
///
/// ```
/// # use tui_tree_list::{Data, StringData};
/// let mut data = StringData::new(["Foo", "Bar", "Baz"]);
/// data.hide(1);
/// assert!(data.is_hidden(1));
/// assert_eq!(data.len(), 3);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StringData {
    items: Vec<String>,
    hidden: BTreeSet<usize>,
}

impl StringData {
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            hidden: BTreeSet::new(),
        }
    }

    pub fn push<S: Into<String>>(&mut self, item: S) {
        self.items.push(item.into());
    }

    /// Hide the item at `index`.
    ///
    /// Returns `true` when it was visible before.
    pub fn hide(&mut self, index: usize) -> bool {
        self.hidden.insert(index)
    }

    /// Show a previously hidden item again.
    ///
    /// Returns `true` when it was hidden before.
    pub fn show(&mut self, index: usize) -> bool {
        self.hidden.remove(&index)
    }
}

impl Data for StringData {
    fn at(&self, index: usize) -> Option<Cow<'_, str>> {
        self.items.get(index).map(|item| Cow::Borrowed(item.as_str()))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_hidden(&self, index: usize) -> bool {
        self.hidden.contains(&index)
    }
}

/// Hide every index of the inner [`Data`] the predicate rejects.
///
/// # Example
///
/// ```
/// # use tui_tree_list::{Filter, List, StringData};
/// let data = StringData::new(["Foo", "Bar", "Baz"]);
/// let list = List::new().data(Filter::new(data, |index| index != 1));
/// assert_eq!(list.to_string(), "• Foo\n• Baz");
/// ```
pub struct Filter<D> {
    data: D,
    predicate: Box<dyn Fn(usize) -> bool + Send + Sync>,
}

impl<D: Data> Filter<D> {
    pub fn new<F>(data: D, predicate: F) -> Self
    where
        F: Fn(usize) -> bool + Send + Sync + 'static,
    {
        Self {
            data,
            predicate: Box::new(predicate),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> D {
        self.data
    }
}

impl<D: Data> Data for Filter<D> {
    fn at(&self, index: usize) -> Option<Cow<'_, str>> {
        self.data.at(index)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_hidden(&self, index: usize) -> bool {
        self.data.is_hidden(index) || !(self.predicate)(index)
    }
}

impl<D: fmt::Debug> fmt::Debug for Filter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Zero based indices of `data` which are not hidden, in order.
pub(crate) fn visible_indices(data: &dyn Data) -> Vec<usize> {
    (0..data.len())
        .filter(|index| !data.is_hidden(*index))
        .collect()
}

#[test]
fn hide_and_show_keep_backing_items() {
    let mut data = StringData::new(["a", "b", "c"]);
    assert!(data.hide(1));
    assert!(!data.hide(1));
    assert_eq!(visible_indices(&data), [0, 2]);
    assert!(data.show(1));
    assert_eq!(visible_indices(&data), [0, 1, 2]);
    assert_eq!(data.at(1).as_deref(), Some("b"));
}

#[test]
fn out_of_bounds_is_none() {
    let data = StringData::new(["a"]);
    assert_eq!(data.at(1), None);
}

#[test]
fn filter_combines_with_inner_mask() {
    let mut data = StringData::new(["a", "b", "c", "d"]);
    data.hide(0);
    let filter = Filter::new(data, |index| index != 2);
    assert_eq!(visible_indices(&filter), [1, 3]);
    assert_eq!(filter.len(), 4);
}
