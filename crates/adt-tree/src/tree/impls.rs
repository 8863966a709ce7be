//! Tree trait implementations: constructors, predicates, accessors, From traits

use super::Tree;

// ═══════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════

impl<T> Tree<T> {
    /// Create the empty tree
    pub fn empty() -> Self {
        Tree::Empty
    }

    /// Create a leaf holding `value`
    pub fn leaf(value: T) -> Self {
        Tree::Leaf(value)
    }

    /// Create an internal node holding `value` with the given subtrees.
    ///
    /// Either subtree may be [`Tree::Empty`].
    pub fn node(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        Tree::Node(value, Box::new(left), Box::new(right))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Variant Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if this is the empty tree
    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    /// Check if this is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// Check if this is an internal node
    pub fn is_node(&self) -> bool {
        matches!(self, Tree::Node(..))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// The value stored at the root, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Tree::Empty => None,
            Tree::Leaf(value) | Tree::Node(value, _, _) => Some(value),
        }
    }

    /// The left subtree of a node
    pub fn left(&self) -> Option<&Tree<T>> {
        match self {
            Tree::Node(_, left, _) => Some(left),
            _ => None,
        }
    }

    /// The right subtree of a node
    pub fn right(&self) -> Option<&Tree<T>> {
        match self {
            Tree::Node(_, _, right) => Some(right),
            _ => None,
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::Empty
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Tree::Leaf(value)
    }
}

impl<T> From<Option<T>> for Tree<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Tree::Leaf(value),
            None => Tree::Empty,
        }
    }
}
