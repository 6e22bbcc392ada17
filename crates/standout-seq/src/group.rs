//! Group stage: fixed-size batches.

use std::num::NonZeroUsize;

use crate::error::{Result, SeqError};
use crate::sequence::Sequence;

/// Re-chunks upstream elements into consecutive batches of `size`.
///
/// Every batch except possibly the last has exactly `size` elements; the
/// last holds the remainder. An empty upstream yields no batches.
///
/// # Example
///
/// ```
/// use standout_seq::{of, Sequence};
///
/// let batches = of!['a', 'b', 'c', 'd', 'e'].group(2).unwrap();
/// assert_eq!(
///     batches.to_list().unwrap(),
///     vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e']]
/// );
/// ```
pub struct Group<S> {
    upstream: S,
    size: NonZeroUsize,
}

impl<S> Group<S> {
    /// Creates a group stage, failing with [`SeqError::InvalidArgument`]
    /// when `size` is zero.
    pub fn new(upstream: S, size: usize) -> Result<Self> {
        let size = NonZeroUsize::new(size)
            .ok_or_else(|| SeqError::invalid("size", "group size must be a positive integer"))?;
        Ok(Group::with_size(upstream, size))
    }

    /// Creates a group stage from a size that is already known to be valid.
    pub fn with_size(upstream: S, size: NonZeroUsize) -> Self {
        Group { upstream, size }
    }

    /// Returns the batch size.
    pub fn size(&self) -> usize {
        self.size.get()
    }
}

impl<S: Sequence> Sequence for Group<S> {
    type Item = Vec<S::Item>;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn advance(&mut self) -> Result<Vec<S::Item>> {
        if !self.upstream.has_next() {
            return Err(SeqError::Exhausted);
        }
        let mut batch = Vec::with_capacity(self.size.get());
        while batch.len() < self.size.get() && self.upstream.has_next() {
            batch.push(self.upstream.advance()?);
        }
        Ok(batch)
    }
}
