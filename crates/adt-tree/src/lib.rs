//! # adt-tree
//!
//! An immutable binary tree algebraic data type.
//!
//! A [`Tree`] is exactly one of three variants:
//!
//! - **Empty**: an absent subtree, carrying nothing
//! - **Leaf**: a single value with no children
//! - **Node**: a value plus two exclusively owned child trees
//!
//! Trees are never mutated after construction. Queries ([`Tree::weight`],
//! [`Tree::values`], [`Tree::leaf_paths`]) borrow the tree, and transforms
//! ([`Tree::fmap`], [`Tree::try_fmap`]) build a new tree of the same shape.
//!
//! ```
//! use adt_tree::Tree;
//!
//! let tree = Tree::node("1", Tree::leaf("1a"), Tree::node("1b", Tree::empty(), Tree::leaf("1bB")));
//!
//! assert_eq!(tree.weight(), 4);
//! assert_eq!(tree.values(), vec![&"1", &"1a", &"1b", &"1bB"]);
//! assert_eq!(
//!     tree.inspect(),
//!     r#"(Node "1" (Leaf "1a") (Node "1b" Empty (Leaf "1bB")))"#
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod tree;

// Re-export main types
pub use error::TransformError;
pub use tree::{Iter, Tree};

/// adt-tree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
