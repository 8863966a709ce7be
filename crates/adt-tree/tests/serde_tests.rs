//! JSON encoding of trees behind the `serde` feature
#![cfg(feature = "serde")]

use adt_tree::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixture() -> Tree<String> {
    Tree::node(
        "1".to_string(),
        Tree::leaf("1a".to_string()),
        Tree::node("1b".to_string(), Tree::empty(), Tree::leaf("1bB".to_string())),
    )
}

#[test]
fn test_serialize_variants() {
    let empty: Tree<u8> = Tree::empty();
    assert_eq!(serde_json::to_value(&empty).unwrap(), json!("Empty"));
    assert_eq!(serde_json::to_value(Tree::leaf(3)).unwrap(), json!({ "Leaf": 3 }));
    assert_eq!(
        serde_json::to_value(Tree::node(1, Tree::empty(), Tree::leaf(2))).unwrap(),
        json!({ "Node": [1, "Empty", { "Leaf": 2 }] })
    );
}

#[test]
fn test_deserialize_fixture() {
    let text = r#"{"Node": ["1", {"Leaf": "1a"}, {"Node": ["1b", "Empty", {"Leaf": "1bB"}]}]}"#;
    let tree: Tree<String> = serde_json::from_str(text).unwrap();
    assert_eq!(tree, fixture());
}

#[test]
fn test_json_preserves_structure() {
    let text = serde_json::to_string(&fixture()).unwrap();
    let tree: Tree<String> = serde_json::from_str(&text).unwrap();
    assert_eq!(tree.inspect(), fixture().inspect());
}

#[test]
fn test_deserialize_rejects_unknown_variant() {
    let result: Result<Tree<u8>, _> = serde_json::from_str(r#"{"Branch": 1}"#);
    assert!(result.is_err());
}
