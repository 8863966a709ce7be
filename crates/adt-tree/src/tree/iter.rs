//! Pre-order iteration over tree values

use std::iter::FusedIterator;

use super::Tree;

/// A pre-order iterator over the values of a [`Tree`].
///
/// Created by [`Tree::iter`]. Walks the tree with an explicit stack, so
/// iteration depth is not bounded by the call stack.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Tree<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        Self {
            stack: vec![tree],
            remaining: tree.weight(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tree) = self.stack.pop() {
            match tree {
                Tree::Empty => {}
                Tree::Leaf(value) => {
                    self.remaining -= 1;
                    return Some(value);
                }
                Tree::Node(value, left, right) => {
                    // Right first so the left subtree is popped next
                    self.stack.push(right.as_ref());
                    self.stack.push(left.as_ref());
                    self.remaining -= 1;
                    return Some(value);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Tree<T> {
    /// Iterate over the values in pre-order without allocating a `Vec`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
