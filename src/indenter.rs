use std::fmt;
use std::sync::Arc;

use crate::node::Node;

type IndenterFn = Arc<dyn Fn(&[&dyn Node], usize, &str) -> String + Send + Sync>;

/// Creates the indentation in front of the descendants of a node.
#[derive(Clone, Default)]
pub enum Indenter {
    /// Continue with `│  ` below every node but the last one, which continues with blank columns.
    #[default]
    Branch,
    /// Arguments are the visible siblings, the index of the node among them and the indentation of the node.
    /// Returns the whole indentation for the descendants of the node.
    Custom(IndenterFn),
}

impl Indenter {
    /// # Example
    ///
    /// ```
    /// # use tui_tree_list::Indenter;
    /// let arrows = Indenter::custom(|_, _, indent| format!("{indent}-> "));
    /// assert_eq!(arrows.indent(&[], 0, "-> "), "-> -> ");
    /// ```
    #[must_use]
    pub fn custom<F>(function: F) -> Self
    where
        F: Fn(&[&dyn Node], usize, &str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(function))
    }

    /// Indentation for the descendants of `siblings[index]`.
    #[must_use]
    pub fn indent(&self, siblings: &[&dyn Node], index: usize, indent: &str) -> String {
        match self {
            Self::Branch if index + 1 < siblings.len() => format!("{indent}│  "),
            Self::Branch => format!("{indent}   "),
            Self::Custom(function) => function(siblings, index, indent),
        }
    }
}

impl fmt::Debug for Indenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch => f.write_str("Branch"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[test]
fn branch_continues_below_non_last() {
    use crate::node::Leaf;
    let a = Leaf::new("a");
    let b = Leaf::new("b");
    let siblings: [&dyn Node; 2] = [&a, &b];
    assert_eq!(Indenter::Branch.indent(&siblings, 0, "   "), "   │  ");
    assert_eq!(Indenter::Branch.indent(&siblings, 1, "│  "), "│     ");
}
