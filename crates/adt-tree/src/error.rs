//! Error types for tree transforms

use thiserror::Error;

/// A fallible transform failed partway through a tree.
///
/// Produced by [`Tree::try_fmap`](crate::Tree::try_fmap). The transform is
/// applied in pre-order, and `position` is the pre-order index of the value
/// it rejected. No partial tree survives the failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transform failed at position {position}")]
pub struct TransformError<E> {
    /// Pre-order index of the value the transform rejected
    pub position: usize,

    /// The transform's own error
    #[source]
    pub source: E,
}

impl<E> TransformError<E> {
    /// Create a transform error at the given pre-order position
    pub fn new(position: usize, source: E) -> Self {
        Self { position, source }
    }

    /// Discard the position and return the transform's own error
    pub fn into_source(self) -> E {
        self.source
    }
}
