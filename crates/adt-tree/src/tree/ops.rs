//! Tree queries and transforms: weight, flattening, fmap, leaf paths

use super::Tree;
use crate::error::TransformError;

impl<T> Tree<T> {
    /// Number of value-bearing positions (leaves and nodes) in the tree.
    ///
    /// Counts with an explicit stack, so it is safe on arbitrarily deep trees.
    pub fn weight(&self) -> usize {
        let mut weight = 0;
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            match tree {
                Tree::Empty => {}
                Tree::Leaf(_) => weight += 1,
                Tree::Node(_, left, right) => {
                    weight += 1;
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                }
            }
        }
        weight
    }

    /// Every value in the tree, in pre-order: a node's own value, then its
    /// left subtree, then its right subtree.
    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Consume the tree, returning its values in pre-order.
    pub fn into_values(self) -> Vec<T> {
        fn flatten_node<T>(node: Tree<T>, flat: &mut Vec<T>) {
            match node {
                Tree::Empty => {}
                Tree::Leaf(value) => flat.push(value),
                Tree::Node(value, left, right) => {
                    flat.push(value);
                    flatten_node(*left, flat);
                    flatten_node(*right, flat);
                }
            }
        }

        let mut flat = Vec::with_capacity(self.weight());
        flatten_node(self, &mut flat);
        flat
    }

    /// Apply `f` to every value, producing a tree of the same shape.
    ///
    /// `f` sees the values in the same pre-order as [`Tree::values`].
    pub fn fmap<U, F>(&self, mut f: F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        self.fmap_with(&mut f)
    }

    fn fmap_with<U, F>(&self, f: &mut F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        match self {
            Tree::Empty => Tree::Empty,
            Tree::Leaf(value) => Tree::Leaf(f(value)),
            Tree::Node(value, left, right) => {
                let value = f(value);
                let left = left.fmap_with(f);
                let right = right.fmap_with(f);
                Tree::node(value, left, right)
            }
        }
    }

    /// Apply a fallible `f` to every value, producing a tree of the same
    /// shape.
    ///
    /// Values are visited in pre-order. The first error aborts the whole
    /// transform: `f` is not called again and no partial tree is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformError`] carrying the pre-order position of the
    /// rejected value and the error `f` produced for it.
    pub fn try_fmap<U, E, F>(&self, mut f: F) -> Result<Tree<U>, TransformError<E>>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        let mut position = 0;
        self.try_fmap_with(&mut f, &mut position).map_err(|err| {
            log::debug!("transform aborted at position {}", err.position);
            err
        })
    }

    fn try_fmap_with<U, E, F>(
        &self,
        f: &mut F,
        position: &mut usize,
    ) -> Result<Tree<U>, TransformError<E>>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        match self {
            Tree::Empty => Ok(Tree::Empty),
            Tree::Leaf(value) => Ok(Tree::Leaf(apply(f, value, position)?)),
            Tree::Node(value, left, right) => {
                let value = apply(f, value, position)?;
                let left = left.try_fmap_with(f, position)?;
                let right = right.try_fmap_with(f, position)?;
                Ok(Tree::node(value, left, right))
            }
        }
    }

    /// Every path from the root down to a terminal position, left to right.
    ///
    /// A terminal position is a leaf, or a node whose children are both
    /// empty. Empty subtrees contribute nothing, so the empty tree has no
    /// paths and a node with one non-empty child prefixes its value onto
    /// that child's paths.
    pub fn leaf_paths(&self) -> Vec<Vec<&T>> {
        let mut paths = Vec::new();
        self.collect_paths(&mut Vec::new(), &mut paths);
        paths
    }

    fn collect_paths<'a>(&'a self, prefix: &mut Vec<&'a T>, paths: &mut Vec<Vec<&'a T>>) {
        match self {
            Tree::Empty => {}
            Tree::Leaf(value) => {
                prefix.push(value);
                paths.push(prefix.clone());
                prefix.pop();
            }
            Tree::Node(value, left, right) => {
                prefix.push(value);
                if left.is_empty() && right.is_empty() {
                    paths.push(prefix.clone());
                } else {
                    left.collect_paths(prefix, paths);
                    right.collect_paths(prefix, paths);
                }
                prefix.pop();
            }
        }
    }
}

#[inline]
fn apply<T, U, E, F>(f: &mut F, value: &T, position: &mut usize) -> Result<U, TransformError<E>>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let at = *position;
    *position += 1;
    f(value).map_err(|source| TransformError::new(at, source))
}
