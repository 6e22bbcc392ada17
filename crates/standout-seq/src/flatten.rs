//! Flatten stage.

use crate::error::{Result, SeqError};
use crate::sequence::{IntoSequence, Sequence};

/// Concatenates the inner sequences of a sequence of sequences, one level
/// deep.
///
/// Works like [`Union`](crate::Union), except sub-sequences are pulled one at
/// a time from the outer sequence, which may itself be lazy. An absent inner
/// sequence (`None`) is treated as empty.
///
/// # Example
///
/// ```
/// use standout_seq::{of, Sequence};
///
/// let flat = of![vec![1, 2], vec![], vec![3]].flatten();
/// assert_eq!(flat.to_list().unwrap(), vec![1, 2, 3]);
/// ```
pub struct Flatten<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    outer: S,
    active: Option<<S::Item as IntoSequence>::IntoSeq>,
    // Failure pulling from the outer sequence, reported on the next advance.
    failed: Option<SeqError>,
}

impl<S> Flatten<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    /// Creates a flattening stage over `outer`.
    pub fn new(outer: S) -> Self {
        Flatten {
            outer,
            active: None,
            failed: None,
        }
    }
}

impl<S> Sequence for Flatten<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    type Item = <S::Item as IntoSequence>::Item;

    fn has_next(&mut self) -> bool {
        if self.failed.is_some() {
            return true;
        }
        if let Some(active) = self.active.as_mut() {
            if active.has_next() {
                return true;
            }
        }
        self.active = None;
        let mut skipped = 0usize;
        while self.outer.has_next() {
            match self.outer.advance() {
                Ok(inner) => {
                    let mut seq = inner.into_seq();
                    if seq.has_next() {
                        tracing::trace!(skipped, "flatten switched to next inner sequence");
                        self.active = Some(seq);
                        return true;
                    }
                    skipped += 1;
                }
                Err(err) => {
                    self.failed = Some(err);
                    return true;
                }
            }
        }
        if skipped > 0 {
            tracing::trace!(skipped, "flatten exhausted");
        }
        false
    }

    fn advance(&mut self) -> Result<Self::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        if let Some(err) = self.failed.take() {
            return Err(err);
        }
        match self.active.as_mut() {
            Some(active) => active.advance(),
            None => Err(SeqError::Exhausted),
        }
    }
}
