//! Display and Debug implementations for Tree
//!
//! Both render the same parenthesized prefix form:
//!
//! ```text
//! (Node "1" (Leaf "1a") (Node "1b" Empty (Leaf "1bB")))
//! ```
//!
//! Debug renders payloads with their own `Debug` (strings quoted), Display
//! with their `Display` (strings bare).

use std::fmt;

use super::Tree;

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Empty => write!(f, "Empty"),
            Tree::Leaf(value) => write!(f, "(Leaf {:?})", value),
            Tree::Node(value, left, right) => {
                write!(f, "(Node {:?} {:?} {:?})", value, left, right)
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Empty => write!(f, "Empty"),
            Tree::Leaf(value) => write!(f, "(Leaf {})", value),
            Tree::Node(value, left, right) => write!(f, "(Node {} {} {})", value, left, right),
        }
    }
}

impl<T: fmt::Debug> Tree<T> {
    /// The canonical rendering of the tree.
    ///
    /// Same as `format!("{:?}", tree)`.
    pub fn inspect(&self) -> String {
        format!("{:?}", self)
    }
}
