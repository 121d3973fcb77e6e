use std::fmt;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Widget;

use crate::ansi::display_width;
use crate::enumerator::{self, Enumerator};
use crate::indenter::Indenter;
use crate::node::{IntoNode, Node, Overrides};
use crate::output;
use crate::style::Style;

/// A `Tree` with an optional root label and children, drawn with box-drawing connectors.
///
/// A `Tree` is a [`Node`] itself, so trees can be nested as subtrees.
///
/// # Example
///
/// ```
/// # use tui_tree_list::Tree;
/// let tree = Tree::new()
///     .child("Foo")
///     .child(Tree::new().root("Bar").child("Qux").child("Quuux"))
///     .child("Baz");
///
/// let expected = "\
/// ├── Foo
/// ├── Bar
/// │  ├── Qux
/// │  └── Quuux
/// └── Baz";
/// assert_eq!(tree.to_string(), expected);
/// ```
#[derive(Debug, Default)]
pub struct Tree {
    root: String,
    children: Vec<Box<dyn Node>>,
    hidden: bool,
    overrides: Overrides,
}

impl Tree {
    /// Create an empty `Tree` without a root label.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of the tree. When rendered on top, an empty root is not printed.
    #[must_use]
    pub fn root<S: Into<String>>(mut self, root: S) -> Self {
        self.root = root.into();
        self
    }

    /// Append a child. `None` is skipped like a hidden node.
    #[must_use]
    pub fn child<N: IntoNode>(mut self, child: N) -> Self {
        self.children.push(child.into_node());
        self
    }

    /// Append multiple children.
    #[must_use]
    pub fn items<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        self.children
            .extend(children.into_iter().map(IntoNode::into_node));
        self
    }

    pub fn add_child<N: IntoNode>(&mut self, child: N) {
        self.children.push(child.into_node());
    }

    /// Get a reference to a child by index.
    #[must_use]
    pub fn get_child(&self, index: usize) -> Option<&dyn Node> {
        self.children.get(index).map(AsRef::as_ref)
    }

    /// Hide the tree with all of its children.
    #[must_use]
    pub const fn hide(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Enumerator of the children. Inherited by subtrees without their own.
    #[must_use]
    pub fn enumerator(mut self, enumerator: Enumerator) -> Self {
        self.overrides.enumerator = Some(enumerator);
        self
    }

    /// Indentation of the descendants. Inherited by subtrees without their own.
    #[must_use]
    pub fn indenter(mut self, indenter: Indenter) -> Self {
        self.overrides.indenter = Some(indenter);
        self
    }

    /// Style of the enumerators of the children.
    ///
    /// The default has a right margin of one column.
    #[must_use]
    pub fn enumerator_style(mut self, style: Style) -> Self {
        self.overrides.enumerator_style = Some(style);
        self
    }

    /// Style of the labels of the children.
    #[must_use]
    pub fn item_style(mut self, style: Style) -> Self {
        self.overrides.item_style = Some(style);
        self
    }

    /// Style of the root label.
    #[must_use]
    pub fn root_style(mut self, style: Style) -> Self {
        self.overrides.root_style = Some(style);
        self
    }

    #[must_use]
    pub fn lines(&self) -> Vec<Line<'static>> {
        render_lines(self)
    }
}

impl Node for Tree {
    fn label(&self) -> &str {
        &self.root
    }

    fn children(&self) -> &[Box<dyn Node>] {
        &self.children
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn overrides(&self) -> Option<&Overrides> {
        Some(&self.overrides)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&output::to_ansi(&self.lines()))
    }
}

impl From<&Tree> for Text<'static> {
    fn from(tree: &Tree) -> Self {
        Self::from(tree.lines())
    }
}

impl Widget for &Tree {
    fn render(self, area: Rect, buf: &mut Buffer) {
        output::render(&self.lines(), area, buf);
    }
}

/// Settings in effect for a group of siblings.
#[derive(Debug, Clone, Copy)]
struct Context<'a> {
    enumerator: &'a Enumerator,
    indenter: &'a Indenter,
    enumerator_style: &'a Style,
    item_style: &'a Style,
}

impl<'a> Context<'a> {
    /// Settings for the children of a node with these `overrides`.
    fn inherit(self, overrides: Option<&'a Overrides>) -> Self {
        let Some(overrides) = overrides else {
            return self;
        };
        Self {
            enumerator: overrides.enumerator.as_ref().unwrap_or(self.enumerator),
            indenter: overrides.indenter.as_ref().unwrap_or(self.indenter),
            enumerator_style: overrides
                .enumerator_style
                .as_ref()
                .unwrap_or(self.enumerator_style),
            item_style: overrides.item_style.as_ref().unwrap_or(self.item_style),
        }
    }
}

/// Render any [`Node`] as a tree.
///
/// The root label is printed without a connector and is suppressed when empty.
/// The children of the root start at the left edge.
#[must_use]
pub fn render_lines(root: &dyn Node) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if root.is_hidden() {
        return lines;
    }

    let enumerator = Enumerator::Branch;
    let indenter = Indenter::Branch;
    let enumerator_style = Style::new().margin_right(1);
    let plain = Style::new();
    let context = Context {
        enumerator: &enumerator,
        indenter: &indenter,
        enumerator_style: &enumerator_style,
        item_style: &plain,
    }
    .inherit(root.overrides());

    if !root.label().is_empty() {
        let root_style = root
            .overrides()
            .and_then(|overrides| overrides.root_style.as_ref())
            .unwrap_or(&plain);
        for line in output::label_lines(root.label()) {
            lines.push(Line::from(root_style.spans(line)));
        }
    }

    render_children(root.children(), context, "", &mut lines);
    tracing::trace!(lines = lines.len(), "render tree");
    lines
}

fn render_children(
    children: &[Box<dyn Node>],
    context: Context<'_>,
    indent: &str,
    lines: &mut Vec<Line<'static>>,
) {
    let visible = children
        .iter()
        .map(|child| &**child)
        .filter(|child| !child.is_hidden())
        .collect::<Vec<&dyn Node>>();
    if visible.is_empty() {
        return;
    }

    let aligned = enumerator::aligned(context.enumerator, context.enumerator_style, visible.len());
    let continuation_width = display_width(indent) + aligned.width;

    for (index, child) in visible.iter().enumerate() {
        let child_indent = context.indenter.indent(&visible, index, indent);

        let mut rows = output::label_lines(child.label());
        let first = rows.next().unwrap_or_default();
        let mut spans = Vec::new();
        if !indent.is_empty() {
            spans.push(Span::raw(indent.to_owned()));
        }
        spans.extend(aligned.labels[index].iter().cloned());
        spans.extend(context.item_style.spans(first));
        lines.push(Line::from(spans));

        let continuation = pad_right(&child_indent, continuation_width);
        for row in rows {
            let mut spans = vec![Span::raw(continuation.clone())];
            spans.extend(context.item_style.spans(row));
            lines.push(Line::from(spans));
        }

        render_children(
            child.children(),
            context.inherit(child.overrides()),
            &child_indent,
            lines,
        );
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let missing = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(missing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Leaf;

    fn foo_bar_baz() -> Tree {
        Tree::new()
            .child("Foo")
            .child(
                Tree::new()
                    .root("Bar")
                    .child("Qux")
                    .child(Tree::new().root("Quux").child("Foo").child("Bar"))
                    .child("Quuux"),
            )
            .child("Baz")
    }

    #[test]
    fn empty_root_is_suppressed() {
        let expected = "\
├── Foo
├── Bar
│  ├── Qux
│  ├── Quux
│  │  ├── Foo
│  │  └── Bar
│  └── Quuux
└── Baz";
        assert_eq!(foo_bar_baz().to_string(), expected);
    }

    #[test]
    fn root_label_is_printed_above() {
        let tree = Tree::new()
            .root("The Root")
            .child("Foo")
            .child(Tree::new().root("Bar").child("Qux").child("Quuux"))
            .child("Baz");
        let expected = "\
The Root
├── Foo
├── Bar
│  ├── Qux
│  └── Quuux
└── Baz";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn starts_with_subtree() {
        let tree = Tree::new()
            .child(Tree::new().root("Bar").child("Qux").child("Quuux"))
            .child("Baz");
        let expected = "\
├── Bar
│  ├── Qux
│  └── Quuux
└── Baz";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn single_subtree_child_starts_at_the_edge() {
        let tree = Tree::new().child(Tree::new().root("Bar").child("Qux").child("Quuux"));
        let expected = "\
└── Bar
   ├── Qux
   └── Quuux";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn last_node_is_subtree() {
        let tree = Tree::new().child("Foo").child(
            Tree::new()
                .root("Bar")
                .child("Qux")
                .child(Tree::new().root("Quux").child("Foo").child("Bar"))
                .child("Quuux"),
        );
        let expected = "\
├── Foo
└── Bar
   ├── Qux
   ├── Quux
   │  ├── Foo
   │  └── Bar
   └── Quuux";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn none_children_are_skipped() {
        let tree = Tree::new()
            .child(None::<Tree>)
            .child(
                Tree::new()
                    .root("Bar")
                    .child("Qux")
                    .child(Tree::new().root("Quux").child("Bar"))
                    .child("Quuux"),
            )
            .child("Baz")
            .child(None::<&str>);
        let expected = "\
├── Bar
│  ├── Qux
│  ├── Quux
│  │  └── Bar
│  └── Quuux
└── Baz";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn hidden_nodes_do_not_count_as_siblings() {
        let tree = Tree::new()
            .child("Foo")
            .child(Tree::new().root("Bar").child("Qux").child(Leaf::new("Hidden").hide(true)))
            .child(Tree::new().root("Baz").child("Gone").hide(true));
        let expected = "\
├── Foo
└── Bar
   └── Qux";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn hidden_root_renders_nothing() {
        assert_eq!(foo_bar_baz().hide(true).to_string(), "");
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(Tree::new().to_string(), "");
        assert_eq!(Tree::new().child(None::<&str>).to_string(), "");
    }

    #[test]
    fn root_without_children() {
        assert_eq!(Tree::new().root("Lonely").to_string(), "Lonely");
    }

    #[test]
    fn custom_enumerator_and_indenter() {
        let tree = foo_bar_baz()
            .enumerator(Enumerator::custom(|_, _| "->".to_owned()))
            .indenter(Indenter::custom(|_, _, indent| format!("{indent}-> ")));
        let expected = "\
-> Foo
-> Bar
-> -> Qux
-> -> Quux
-> -> -> Foo
-> -> -> Bar
-> -> Quuux
-> Baz";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn multiline_labels_keep_their_column() {
        let tree = Tree::new()
            .root("Multiline\nRoot\nNode")
            .child("Foo")
            .child(
                Tree::new()
                    .root("Bar")
                    .child("Qux\nLine 2\nLine 3\nLine 4")
                    .child(Tree::new().root("Quux").child("Foo").child("Bar"))
                    .child("Quuux"),
            )
            .child("Baz\nLine 2");
        let expected = "\
Multiline
Root
Node
├── Foo
├── Bar
│  ├── Qux
│  │   Line 2
│  │   Line 3
│  │   Line 4
│  ├── Quux
│  │  ├── Foo
│  │  └── Bar
│  └── Quuux
└── Baz
    Line 2";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn styles_are_inherited_until_overridden() {
        let tree = Tree::new()
            .child("Glossier")
            .child(
                Tree::new()
                    .root("Nyx")
                    .child("Qux")
                    .enumerator_style(Style::new().margin_right(2)),
            )
            .child("Mac")
            .enumerator(Enumerator::Tree)
            .enumerator_style(Style::new().margin_right(1))
            .item_style(Style::new().transform(str::to_uppercase));
        let expected = "\
├─ GLOSSIER
├─ NYX
│  └─  QUX
└─ MAC";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn subtree_enumerator_only_applies_below_it() {
        let tree = Tree::new()
            .child("a")
            .child(
                Tree::new()
                    .root("b")
                    .child("c")
                    .child("d")
                    .enumerator(Enumerator::Arabic),
            );
        let expected = "\
├── a
└── b
   1. c
   2. d";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn wide_enumerators_are_aligned() {
        let tree = Tree::new()
            .root("Chapters")
            .items((0..10).map(|i| format!("Chapter {i}")))
            .enumerator(Enumerator::Roman);
        let rendered = tree.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "   I. Chapter 0");
        assert_eq!(lines[8], "VIII. Chapter 7");
        assert_eq!(lines[10], "   X. Chapter 9");
    }

    #[test]
    fn root_style_only_applies_to_the_root() {
        let tree = Tree::new()
            .root("root")
            .child(Tree::new().root("sub").child("leaf").root_style(Style::new().transform(|_| "x".to_owned())))
            .root_style(Style::new().transform(str::to_uppercase));
        assert_eq!(tree.to_string(), "ROOT\n└── sub\n   └── leaf");
    }

    #[test]
    fn painted_root() {
        use ratatui::style::Stylize;
        let tree = Tree::new().root("Root").child("Foo").root_style(Style::new().bold());
        assert_eq!(tree.to_string(), "\x1b[1mRoot\x1b[0m\n└── Foo");
    }

    #[test]
    fn custom_node_implementation() {
        #[derive(Debug)]
        struct Directory {
            name: &'static str,
            entries: Vec<Box<dyn Node>>,
        }

        impl Node for Directory {
            fn label(&self) -> &str {
                self.name
            }

            fn children(&self) -> &[Box<dyn Node>] {
                &self.entries
            }
        }

        let root = Directory {
            name: "src",
            entries: vec![
                Box::new(Leaf::new("lib.rs")),
                Box::new(Directory {
                    name: "bin",
                    entries: vec![Box::new(Leaf::new("main.rs"))],
                }),
            ],
        };
        let rendered = output::to_ansi(&render_lines(&root));
        assert_eq!(rendered, "src\n├── lib.rs\n└── bin\n   └── main.rs");
    }

    #[test]
    fn every_row_but_the_last_sibling_uses_the_tee() {
        let rendered = foo_bar_baz().to_string();
        let tees = rendered.matches('├').count();
        let corners = rendered.matches('└').count();
        assert_eq!(tees, 5);
        assert_eq!(corners, 3);
    }

    #[test]
    fn widget_renders_into_buffer() {
        let tree = Tree::new().child("Foo").child("Bar");
        let area = Rect::new(0, 0, 8, 3);
        let mut buffer = Buffer::empty(area);
        tree.render(area, &mut buffer);
        assert_eq!(
            buffer,
            Buffer::with_lines(["├── Foo ", "└── Bar ", "        "])
        );
    }
}
