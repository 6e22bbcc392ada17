//! Union stage.
//!
//! Concatenates a fixed, ordered list of sequences. Sub-sequences are kept
//! in a queue and only converted into a live traversal when the previous one
//! is exhausted; empty ones are skipped without a gap.

use std::collections::VecDeque;

use crate::error::{Result, SeqError};
use crate::sequence::{IntoSequence, Sequence};

/// Yields all elements of each sub-sequence in turn.
///
/// Created by [`Union::new`], [`Sequence::union`] or the
/// [`union!`](crate::union!) macro. A union always has at least two
/// sub-sequences; a union of one is just that sequence.
///
/// # Example
///
/// ```
/// use standout_seq::{empty, of, union, Sequence};
///
/// let joined = union![of![1, 2], empty(), vec![3], of![4].filter(|n| *n > 0)];
/// assert_eq!(joined.to_list().unwrap(), vec![1, 2, 3, 4]);
/// ```
pub struct Union<I: IntoSequence> {
    pending: VecDeque<I>,
    active: Option<I::IntoSeq>,
}

impl<I: IntoSequence> Union<I> {
    /// Creates a union of `first`, `second` and then every element of `rest`.
    pub fn new(first: I, second: I, rest: impl IntoIterator<Item = I>) -> Self {
        let mut pending = VecDeque::from([first, second]);
        pending.extend(rest);
        Union {
            pending,
            active: None,
        }
    }

    /// Returns how many sub-sequences have not been started yet.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<I: IntoSequence> Sequence for Union<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        if let Some(active) = self.active.as_mut() {
            if active.has_next() {
                return true;
            }
        }
        let mut skipped = 0usize;
        while let Some(next) = self.pending.pop_front() {
            let mut seq = next.into_seq();
            if seq.has_next() {
                tracing::trace!(
                    skipped,
                    pending = self.pending.len(),
                    "union switched to next sub-sequence"
                );
                self.active = Some(seq);
                return true;
            }
            skipped += 1;
        }
        if self.active.take().is_some() || skipped > 0 {
            tracing::trace!(skipped, "union exhausted");
        }
        false
    }

    fn advance(&mut self) -> Result<I::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        match self.active.as_mut() {
            Some(active) => active.advance(),
            None => Err(SeqError::Exhausted),
        }
    }
}

/// Concatenates two or more sequences of the same element type.
///
/// Each argument goes through [`IntoSequence`] and is boxed, so arguments
/// may be different sequence types, vectors, arrays or options.
///
/// ```
/// use standout_seq::{of, union, Sequence};
///
/// let absent: Option<Vec<i32>> = None;
/// let all = union![of![1], absent, [2, 3]];
/// assert_eq!(all.to_list().unwrap(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! union {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::Union::new(
            $crate::Sequence::boxed($crate::IntoSequence::into_seq($first)),
            $crate::Sequence::boxed($crate::IntoSequence::into_seq($second)),
            [$($crate::Sequence::boxed($crate::IntoSequence::into_seq($rest))),*],
        )
    };
}
