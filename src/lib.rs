#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

/*!
Render trees and enumerated lists as blocks of text.

A [`Tree`] is drawn with box-drawing connectors, a [`List`] with an [`Enumerator`] (bullets, numbers, letters, Roman numerals or anything custom) in front of each item.
Both handle multi-line labels, hidden entries and per level [`Style`]s.

The output is either a `String` (via [`Display`](std::fmt::Display), colors as ANSI escape sequences) or ratatui [`Line`](ratatui::text::Line)s which can be rendered as a [`Widget`](ratatui::widgets::Widget).
Every render recomputes the output from the current structure.

# Example

```
# use tui_tree_list::{Enumerator, List, Tree};
let list = List::new()
    .item("Foo")
    .item("Bar")
    .item("Baz")
    .enumerator(Enumerator::Roman)
    .hide(1);
assert_eq!(list.to_string(), " I. Foo\nII. Baz");

let tree = Tree::new()
    .root("The Root")
    .child("Foo")
    .child(Tree::new().root("Bar").child("Qux"));
assert_eq!(tree.to_string(), "The Root\n├── Foo\n└── Bar\n   └── Qux");
```
*/

mod ansi;
mod data;
mod enumerator;
mod indenter;
#[cfg(feature = "json")]
pub mod json;
mod list;
mod node;
pub mod numeral;
mod output;
mod style;
mod tree;

pub use crate::ansi::display_width;
pub use crate::data::{Data, Filter, StringData};
pub use crate::enumerator::Enumerator;
pub use crate::indenter::Indenter;
pub use crate::list::List;
pub use crate::node::{IntoNode, Leaf, Node, Overrides};
pub use crate::style::Style;
pub use crate::tree::{render_lines, Tree};
