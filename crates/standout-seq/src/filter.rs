//! Filter stage.
//!
//! Knowing whether a filtered sequence has another element means pulling
//! upstream elements until one passes. The passing element is cached so the
//! following [`advance`](Sequence::advance) neither re-pulls nor re-tests it.

use crate::error::{Result, SeqError};
use crate::sequence::Sequence;

/// Yields only upstream elements for which the predicate holds.
///
/// Created by [`Sequence::filter`] or [`Filter::try_new`].
///
/// # Protocol
///
/// [`advance`](Sequence::advance) hands out the element cached by the last
/// positive [`has_next`](Sequence::has_next). Advancing without one fails
/// with [`SeqError::Protocol`].
///
/// # Example
///
/// ```
/// use standout_seq::{of, Sequence};
///
/// let mut odd = of![1, 2, 3].filter(|n| n % 2 == 1);
/// assert!(odd.has_next());
/// assert!(odd.has_next());
/// assert_eq!(odd.advance().unwrap(), 1);
/// assert_eq!(odd.to_list().unwrap(), vec![3]);
/// ```
pub struct Filter<S: Sequence, P> {
    upstream: S,
    predicate: P,
    // Some while a validated candidate (or an upstream failure) waits to be consumed.
    cached: Option<Result<S::Item>>,
}

impl<S: Sequence, P> Filter<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Filter {
            upstream,
            predicate,
            cached: None,
        }
    }

    /// Creates a filter from a predicate that may be absent.
    ///
    /// Fails with [`SeqError::MissingArgument`] before any traversal.
    pub fn try_new(upstream: S, predicate: Option<P>) -> Result<Self> {
        let predicate = predicate.ok_or_else(|| SeqError::missing("predicate"))?;
        Ok(Filter::new(upstream, predicate))
    }
}

impl<S, P, R> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> R,
    R: Into<Option<bool>>,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        if self.cached.is_some() {
            return true;
        }
        while self.upstream.has_next() {
            match self.upstream.advance() {
                Ok(item) => {
                    if (self.predicate)(&item).into().unwrap_or(false) {
                        self.cached = Some(Ok(item));
                        return true;
                    }
                }
                Err(err) => {
                    self.cached = Some(Err(err));
                    return true;
                }
            }
        }
        tracing::trace!("filter upstream exhausted");
        false
    }

    fn advance(&mut self) -> Result<S::Item> {
        self.cached
            .take()
            .unwrap_or(Err(SeqError::Protocol { stage: "filter" }))
    }
}

/// Yields the present values of a sequence of `Option<T>`.
///
/// Created by [`Sequence::filter_some`]. Follows the same look-ahead
/// protocol as [`Filter`].
pub struct FilterSome<S, T> {
    upstream: S,
    cached: Option<Result<T>>,
}

impl<S, T> FilterSome<S, T> {
    pub(crate) fn new(upstream: S) -> Self {
        FilterSome {
            upstream,
            cached: None,
        }
    }
}

impl<S, T> Sequence for FilterSome<S, T>
where
    S: Sequence<Item = Option<T>>,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        if self.cached.is_some() {
            return true;
        }
        while self.upstream.has_next() {
            match self.upstream.advance() {
                Ok(Some(item)) => {
                    self.cached = Some(Ok(item));
                    return true;
                }
                Ok(None) => {}
                Err(err) => {
                    self.cached = Some(Err(err));
                    return true;
                }
            }
        }
        false
    }

    fn advance(&mut self) -> Result<T> {
        self.cached.take().unwrap_or(Err(SeqError::Protocol {
            stage: "filter_some",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, from_iter, from_vec, of};
    use std::cell::Cell;

    #[test]
    fn keeps_matching_in_order() {
        let result = of![5, 2, 8, 1, 9, 4]
            .filter(|n| *n > 3)
            .to_list()
            .unwrap();
        assert_eq!(result, vec![5, 8, 9, 4]);
    }

    #[test]
    fn repeated_has_next_is_idempotent() {
        let calls = Cell::new(0);
        let mut seq = of![1, 2, 3, 4].filter(|n| {
            calls.set(calls.get() + 1);
            n % 2 == 0
        });

        for _ in 0..5 {
            assert!(seq.has_next());
        }
        assert_eq!(calls.get(), 2);
        assert_eq!(seq.advance().unwrap(), 2);
        assert!(seq.has_next());
        assert_eq!(seq.advance().unwrap(), 4);
        assert!(!seq.has_next());
        assert!(!seq.has_next());
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn advance_without_has_next_is_protocol_error() {
        let mut seq = of![1, 2].filter(|_| true);
        assert_eq!(seq.advance(), Err(SeqError::Protocol { stage: "filter" }));

        assert!(seq.has_next());
        assert_eq!(seq.advance().unwrap(), 1);
        assert_eq!(seq.advance(), Err(SeqError::Protocol { stage: "filter" }));
    }

    #[test]
    fn optional_predicate_result_counts_as_false() {
        let result = of![1, 2, 3, 4]
            .filter(|n| if *n == 2 { None } else { Some(*n > 1) })
            .to_list()
            .unwrap();
        assert_eq!(result, vec![3, 4]);
    }

    #[test]
    fn empty_upstream_and_no_matches() {
        assert_eq!(empty::<i32>().filter(|_| true).count().unwrap(), 0);
        assert_eq!(of![1, 2, 3].filter(|_| false).count().unwrap(), 0);
    }

    #[test]
    fn missing_predicate_fails_at_construction() {
        let predicate: Option<fn(&i32) -> bool> = None;
        let result = Filter::try_new(of![1], predicate);
        assert!(matches!(
            result,
            Err(SeqError::MissingArgument { name: "predicate" })
        ));
    }

    #[test]
    fn present_predicate_constructs() {
        let seq = Filter::try_new(of![1, 2, 3], Some(|n: &i32| *n != 2)).unwrap();
        assert_eq!(seq.to_list().unwrap(), vec![1, 3]);
    }

    #[test]
    fn upstream_failure_is_surfaced_not_swallowed() {
        let mut seq = from_vec(vec![1i64, -1, 2])
            .cast::<u8>()
            .filter(|_| true);
        assert!(seq.has_next());
        assert_eq!(seq.advance().unwrap(), 1);
        assert!(seq.has_next());
        assert!(matches!(seq.advance(), Err(SeqError::Cast { .. })));
        assert!(seq.has_next());
        assert_eq!(seq.advance().unwrap(), 2);
    }

    #[test]
    fn filter_some_skips_absent_values() {
        let result = from_iter(vec![Some(1), None, Some(3), None])
            .filter_some()
            .to_list()
            .unwrap();
        assert_eq!(result, vec![1, 3]);
    }

    #[test]
    fn filter_some_surfaces_upstream_failure() {
        let mut seq = of![Some(1i64), None, Some(-1), Some(3)]
            .convert(|value| match value {
                Some(n) => u8::try_from(n)
                    .map(Some)
                    .map_err(|e| SeqError::invalid("value", e.to_string())),
                None => Ok(None),
            })
            .filter_some();
        assert!(seq.has_next());
        assert_eq!(seq.advance().unwrap(), 1);
        assert!(seq.has_next());
        assert!(matches!(
            seq.advance(),
            Err(SeqError::InvalidArgument { name: "value", .. })
        ));
        assert!(seq.has_next());
        assert_eq!(seq.advance().unwrap(), 3);
        assert!(!seq.has_next());
    }

    #[test]
    fn filter_some_protocol() {
        let mut seq = of![None, Some('x')].filter_some();
        assert_eq!(
            seq.advance(),
            Err(SeqError::Protocol {
                stage: "filter_some"
            })
        );
        assert!(seq.has_next());
        assert_eq!(seq.advance().unwrap(), 'x');
    }
}
