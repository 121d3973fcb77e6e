use serde_json::Value;

use crate::node::{IntoNode, Leaf, Node};
use crate::Tree;

/// Create a [`Tree`] from a [JSON](Value).
///
/// Objects and arrays become subtrees labeled with their key or index, everything else becomes a leaf `key: value`.
/// The returned tree has no root label so the top level entries start at the left edge.
///
/// # Example
///
/// ```
/// let json = serde_json::json!({"foo": {"bar": [13, 37]}, "test": true});
/// let expected = "\
/// ├── foo
/// │  └── bar
/// │     ├── 0: 13
/// │     └── 1: 37
/// └── test: true";
/// assert_eq!(tui_tree_list::json::tree(&json).to_string(), expected);
/// ```
#[must_use]
pub fn tree(root: &Value) -> Tree {
    match root {
        Value::Object(object) => from_object(object),
        Value::Array(array) => from_array(array),
        _ => Tree::new().child(value_text(root)),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        // only empty containers end up as text
        Value::Array(_) => "[]".to_owned(),
        Value::Object(_) => "{}".to_owned(),
        Value::Null => "null".to_owned(),
        Value::Bool(value) => value.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(string) => string.clone(),
    }
}

fn recurse(key: String, value: &Value) -> Box<dyn Node> {
    match value {
        Value::Array(array) if !array.is_empty() => from_array(array).root(key).into_node(),
        Value::Object(object) if !object.is_empty() => from_object(object).root(key).into_node(),
        _ => Leaf::new(format!("{key}: {}", value_text(value))).into_node(),
    }
}

fn from_object(object: &serde_json::Map<String, Value>) -> Tree {
    object
        .iter()
        .fold(Tree::new(), |tree, (key, value)| {
            tree.child(recurse(key.clone(), value))
        })
}

fn from_array(array: &[Value]) -> Tree {
    array
        .iter()
        .enumerate()
        .fold(Tree::new(), |tree, (index, value)| {
            tree.child(recurse(index.to_string(), value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_creates_empty_tree() {
        let json = serde_json::json!({});
        let tree = tree(&json);
        assert!(tree.children().is_empty());
        assert_eq!(tree.to_string(), "");
    }

    #[test]
    fn number_is_a_single_leaf() {
        let json = serde_json::json!(42);
        assert_eq!(tree(&json).to_string(), "└── 42");
    }

    #[test]
    fn all_simple_in_array() {
        let json: Value =
            serde_json::from_str(r#"[null, true, false, [], {}, 42, "lalala"]"#).unwrap();
        let expected = "\
├── 0: null
├── 1: true
├── 2: false
├── 3: []
├── 4: {}
├── 5: 42
└── 6: lalala";
        assert_eq!(tree(&json).to_string(), expected);
    }

    #[test]
    fn keeps_object_order() {
        let json: Value = serde_json::from_str(r#"{"z": 1, "a": {"y": 2, "b": 3}}"#).unwrap();
        let expected = "\
├── z: 1
└── a
   ├── y: 2
   └── b: 3";
        assert_eq!(tree(&json).to_string(), expected);
    }
}
