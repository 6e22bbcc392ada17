//! Map stage.

use crate::error::{Result, SeqError};
use crate::sequence::Sequence;

/// Applies a transform to every upstream element, preserving order and
/// cardinality.
///
/// Created by [`Sequence::map`] or [`Map::try_new`]. No look-ahead is
/// needed: `has_next` delegates to upstream and the transform runs on
/// `advance`.
pub struct Map<S, F> {
    upstream: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, transform: F) -> Self {
        Map {
            upstream,
            transform,
        }
    }

    /// Creates a map stage from a transform that may be absent.
    ///
    /// Fails with [`SeqError::MissingArgument`] before any traversal.
    pub fn try_new(upstream: S, transform: Option<F>) -> Result<Self> {
        let transform = transform.ok_or_else(|| SeqError::missing("transform"))?;
        Ok(Map::new(upstream, transform))
    }
}

impl<S, F, O> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> O,
{
    type Item = O;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn advance(&mut self) -> Result<O> {
        self.upstream.advance().map(&mut self.transform)
    }
}

/// The identity transform.
///
/// A plain function, so `seq.map(identity)` needs no shared instance.
pub fn identity<T>(value: T) -> T {
    value
}
