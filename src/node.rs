use std::fmt;

use crate::enumerator::Enumerator;
use crate::indenter::Indenter;
use crate::style::Style;
use crate::tree::Tree;

/// A node in a [`Tree`].
///
/// Implement this to render your own structures with [`render_lines`](crate::render_lines).
/// A node exclusively owns its children.
pub trait Node: fmt::Debug {
    /// Text of the node. Can span multiple lines.
    fn label(&self) -> &str;

    /// Children in rendering order.
    fn children(&self) -> &[Box<dyn Node>] {
        &[]
    }

    /// Hidden nodes are skipped together with their whole subtree.
    fn is_hidden(&self) -> bool {
        false
    }

    /// How the children of this node are rendered.
    ///
    /// Everything not set here is inherited from the closest ancestor setting it.
    fn overrides(&self) -> Option<&Overrides> {
        None
    }
}

/// Rendering settings of a node which apply to its descendants.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub enumerator: Option<Enumerator>,
    pub indenter: Option<Indenter>,
    pub enumerator_style: Option<Style>,
    pub item_style: Option<Style>,
    /// Only used when the node is the one being rendered.
    pub root_style: Option<Style>,
}

/// A node without children.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Leaf {
    label: String,
    hidden: bool,
}

impl Leaf {
    #[must_use]
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            hidden: false,
        }
    }

    #[must_use]
    pub const fn hide(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl Node for Leaf {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Conversion into a boxed [`Node`] for building trees.
///
/// `None` results in a hidden node which takes no space in the output.
pub trait IntoNode {
    fn into_node(self) -> Box<dyn Node>;
}

impl IntoNode for Box<dyn Node> {
    fn into_node(self) -> Box<dyn Node> {
        self
    }
}

impl IntoNode for &str {
    fn into_node(self) -> Box<dyn Node> {
        Box::new(Leaf::new(self))
    }
}

impl IntoNode for String {
    fn into_node(self) -> Box<dyn Node> {
        Box::new(Leaf::new(self))
    }
}

impl IntoNode for Leaf {
    fn into_node(self) -> Box<dyn Node> {
        Box::new(self)
    }
}

impl IntoNode for Tree {
    fn into_node(self) -> Box<dyn Node> {
        Box::new(self)
    }
}

impl<T: IntoNode> IntoNode for Option<T> {
    fn into_node(self) -> Box<dyn Node> {
        self.map_or_else(|| Leaf::default().hide(true).into_node(), IntoNode::into_node)
    }
}

#[test]
fn leaf_has_no_children() {
    let leaf = Leaf::new("Foo");
    assert_eq!(leaf.label(), "Foo");
    assert!(leaf.children().is_empty());
    assert!(!leaf.is_hidden());
    assert!(leaf.overrides().is_none());
}

#[test]
fn none_is_hidden() {
    let node = None::<&str>.into_node();
    assert!(node.is_hidden());
    let node = Some("Foo").into_node();
    assert!(!node.is_hidden());
    assert_eq!(node.label(), "Foo");
}
