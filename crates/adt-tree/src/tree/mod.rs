//! The binary tree algebraic data type

mod display;
mod impls;
mod iter;
mod ops;

pub use iter::Iter;

/// An immutable binary tree.
///
/// Every value-bearing position is either a `Leaf` (no children) or a
/// `Node` (two children, each of which may be `Empty`). Children are owned
/// exclusively through `Box`; nothing in a tree is shared or mutated after
/// construction, so a `Tree<T>` is `Send + Sync` whenever `T` is.
///
/// Equality and hashing are structural: two trees compare equal exactly
/// when they have the same shape and the same values in the same places.
///
/// [`Tree::weight`], [`Tree::values`] and [`Tree::iter`] walk the tree with
/// an explicit stack. Everything else recurses once per level: the
/// transforms, `leaf_paths`, `into_values`, rendering, comparison, cloning,
/// and dropping. On those paths the usable depth is bounded by the thread's
/// stack.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tree<T> {
    /// An absent subtree
    Empty,

    /// A single value with no children
    Leaf(T),

    /// A value with a left and a right subtree
    Node(T, Box<Tree<T>>, Box<Tree<T>>),
}
