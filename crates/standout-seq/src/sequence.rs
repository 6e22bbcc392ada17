//! The core [`Sequence`] abstraction.
//!
//! A sequence is a lazy, single-pass, ordered producer of elements. Consumers
//! drive it with two calls:
//!
//! - [`has_next`](Sequence::has_next) answers whether another element exists.
//!   Calling it any number of times without advancing never skips or
//!   duplicates an element.
//! - [`advance`](Sequence::advance) consumes exactly one element.
//!
//! Every stage (filter, map, union, flatten, group, cast) is itself a
//! sequence, so stages compose freely and terminal operations never need to
//! know how many stages precede them.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::cast::{Cast, Convert};
use crate::error::{Result, SeqError};
use crate::filter::{Filter, FilterSome};
use crate::flatten::Flatten;
use crate::group::Group;
use crate::map::Map;
use crate::same::Identity;
use crate::stack::Stack;
use crate::union::Union;

/// A type-erased sequence.
///
/// Use [`Sequence::boxed`] to erase a stage chain, e.g. to union sequences of
/// different concrete types.
pub type BoxedSequence<'a, T> = Box<dyn Sequence<Item = T> + 'a>;

/// A lazy, single-pass sequence of elements.
///
/// Implementors provide [`has_next`](Self::has_next) and
/// [`advance`](Self::advance); everything else is built on those two.
///
/// # Example
///
/// ```
/// use standout_seq::{of, Sequence};
///
/// let evens = of![1, 2, 3, 4, 5, 6]
///     .filter(|n| n % 2 == 0)
///     .map(|n| n * 10)
///     .to_list()
///     .unwrap();
///
/// assert_eq!(evens, vec![20, 40, 60]);
/// ```
///
/// # Implementing
///
/// ```
/// use standout_seq::{Result, SeqError, Sequence};
///
/// struct Countdown(u32);
///
/// impl Sequence for Countdown {
///     type Item = u32;
///
///     fn has_next(&mut self) -> bool {
///         self.0 > 0
///     }
///
///     fn advance(&mut self) -> Result<u32> {
///         if self.0 == 0 {
///             return Err(SeqError::Exhausted);
///         }
///         self.0 -= 1;
///         Ok(self.0 + 1)
///     }
/// }
///
/// assert_eq!(Countdown(3).to_list().unwrap(), vec![3, 2, 1]);
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns `true` if another element can be consumed.
    ///
    /// Must be idempotent: repeated calls without an intervening
    /// [`advance`](Self::advance) return the same answer and leave the next
    /// element unchanged. Once it returns `false` it keeps returning `false`.
    fn has_next(&mut self) -> bool;

    /// Consumes and returns the next element.
    ///
    /// Fails with [`SeqError::Exhausted`] when no element remains.
    fn advance(&mut self) -> Result<Self::Item>;

    /// Removing elements during traversal is never supported.
    fn remove(&mut self) -> Result<()> {
        Err(SeqError::Unsupported {
            operation: "remove",
        })
    }

    // ========================================================================
    // Adapters
    // ========================================================================

    /// Borrows the sequence so a terminal operation can consume part of it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Erases the concrete sequence type.
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Bridges into a std iterator yielding `Result<Item>`.
    fn results(self) -> Results<Self>
    where
        Self: Sized,
    {
        Results { seq: self }
    }

    // ========================================================================
    // Stages
    // ========================================================================

    /// Yields only elements for which `predicate` holds.
    ///
    /// The predicate may return `bool` or `Option<bool>`; `None` counts as
    /// `false`.
    fn filter<P, R>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> R,
        R: Into<Option<bool>>,
    {
        Filter::new(self, predicate)
    }

    /// Yields the present values of a sequence of options.
    fn filter_some<T>(self) -> FilterSome<Self, T>
    where
        Self: Sized + Sequence<Item = Option<T>>,
    {
        FilterSome::new(self)
    }

    /// Applies `transform` to every element, 1:1 and in order.
    fn map<O, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> O,
    {
        Map::new(self, transform)
    }

    /// Yields all of `self`, then all of `other`.
    ///
    /// Both sides are boxed so they may be different stage types. Use
    /// [`union!`](crate::union!) to join more than two.
    fn union<'a, I>(self, other: I) -> Union<BoxedSequence<'a, Self::Item>>
    where
        Self: Sized + 'a,
        I: IntoSequence<Item = Self::Item>,
        I::IntoSeq: 'a,
    {
        Union::new(self.boxed(), other.into_seq().boxed(), std::iter::empty())
    }

    /// Concatenates a sequence of sequences, one level deep.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoSequence,
    {
        Flatten::new(self)
    }

    /// Re-chunks into batches of `size` elements; the last may be shorter.
    ///
    /// Fails with [`SeqError::InvalidArgument`] when `size` is zero.
    fn group(self, size: usize) -> Result<Group<Self>>
    where
        Self: Sized,
    {
        Group::new(self, size)
    }

    /// Converts every element with `TryFrom`, lazily.
    ///
    /// A failed conversion is reported by the `advance` that reaches it.
    fn cast<O>(self) -> Cast<Self, O>
    where
        Self: Sized,
        O: TryFrom<Self::Item>,
    {
        Cast::new(self)
    }

    /// Converts every element with a caller-supplied fallible function.
    fn convert<O, F>(self, conversion: F) -> Convert<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<O>,
    {
        Convert::new(self, conversion)
    }

    // ========================================================================
    // Terminal operations
    // ========================================================================

    /// Counts the elements.
    ///
    /// Performs a full traversal unless the sequence tracks its size
    /// structurally and overrides this method.
    fn count(self) -> Result<usize>
    where
        Self: Sized,
    {
        self.drain()
    }

    /// Traverses every element and returns how many were seen.
    ///
    /// Unlike [`count`](Self::count) this always pulls every element, so any
    /// side effects of upstream stages run.
    fn drain(mut self) -> Result<usize>
    where
        Self: Sized,
    {
        let mut n = 0;
        while self.has_next() {
            self.advance()?;
            n += 1;
        }
        Ok(n)
    }

    /// Returns `true` if an element is the very same object as `needle`.
    ///
    /// Membership is identity-based (see [`Identity`]), not value equality.
    fn contains(mut self, needle: &Self::Item) -> Result<bool>
    where
        Self: Sized,
        Self::Item: Identity,
    {
        while self.has_next() {
            if self.advance()?.is_same(needle) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Collects the elements in order.
    fn to_list(mut self) -> Result<Vec<Self::Item>>
    where
        Self: Sized,
    {
        let mut list = Vec::new();
        while self.has_next() {
            list.push(self.advance()?);
        }
        Ok(list)
    }

    /// Pushes the elements in order; the last element ends up on top.
    fn to_stack(mut self) -> Result<Stack<Self::Item>>
    where
        Self: Sized,
    {
        let mut stack = Stack::new();
        while self.has_next() {
            stack.push(self.advance()?);
        }
        Ok(stack)
    }

    /// Collects into a map keyed by `key`. Later elements overwrite earlier
    /// ones with the same key.
    fn to_map<K, F>(mut self, mut key: F) -> Result<HashMap<K, Self::Item>>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let mut map = HashMap::new();
        while self.has_next() {
            let item = self.advance()?;
            map.insert(key(&item), item);
        }
        Ok(map)
    }

    /// Like [`to_map`](Self::to_map), for a key function that may be absent.
    ///
    /// Fails with [`SeqError::MissingArgument`] before traversing anything.
    fn try_to_map<K, F>(self, key: Option<F>) -> Result<HashMap<K, Self::Item>>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let key = key.ok_or_else(|| SeqError::missing("key"))?;
        self.to_map(key)
    }

    /// Returns the greatest element; ties keep the earliest.
    fn max(self) -> Result<Option<Self::Item>>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Returns the least element; ties keep the earliest.
    fn min(self) -> Result<Option<Self::Item>>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Returns the greatest element by `compare`; ties keep the earliest.
    fn max_by<F>(self, mut compare: F) -> Result<Option<Self::Item>>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        select(self, |next, best| compare(next, best) == Ordering::Greater)
    }

    /// Returns the least element by `compare`; ties keep the earliest.
    fn min_by<F>(self, mut compare: F) -> Result<Option<Self::Item>>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        select(self, |next, best| compare(next, best) == Ordering::Less)
    }

    /// Returns the first element.
    ///
    /// Fails with [`SeqError::Exhausted`] on an empty sequence.
    fn single(mut self) -> Result<Self::Item>
    where
        Self: Sized,
    {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        self.advance()
    }

    /// Joins the elements' `Display` forms with `separator`.
    ///
    /// `None` joins with nothing in between; an empty sequence yields `""`.
    fn concat(mut self, separator: Option<&str>) -> Result<String>
    where
        Self: Sized,
        Self::Item: Display,
    {
        let mut out = String::new();
        let mut first = true;
        while self.has_next() {
            let item = self.advance()?;
            if !first {
                out.push_str(separator.unwrap_or_default());
            }
            out.push_str(&item.to_string());
            first = false;
        }
        Ok(out)
    }
}

/// Linear scan keeping the first element as candidate; `replaces(next, best)`
/// decides whether a later element takes over.
fn select<S, F>(mut seq: S, mut replaces: F) -> Result<Option<S::Item>>
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if !seq.has_next() {
        return Ok(None);
    }
    let mut best = seq.advance()?;
    while seq.has_next() {
        let next = seq.advance()?;
        if replaces(&next, &best) {
            best = next;
        }
    }
    Ok(Some(best))
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn advance(&mut self) -> Result<S::Item> {
        (**self).advance()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn advance(&mut self) -> Result<S::Item> {
        (**self).advance()
    }
}

/// Conversion into a [`Sequence`].
///
/// This is Source Normalization: every accepted input becomes one canonical
/// lazy sequence. A value that already is a sequence is returned unchanged,
/// and `None` becomes the empty sequence.
///
/// # Example
///
/// ```
/// use standout_seq::{IntoSequence, Sequence};
///
/// let absent: Option<Vec<i32>> = None;
/// assert_eq!(absent.into_seq().count().unwrap(), 0);
///
/// let present = Some(vec![1, 2]);
/// assert_eq!(present.into_seq().to_list().unwrap(), vec![1, 2]);
/// ```
pub trait IntoSequence {
    /// The element type of the resulting sequence.
    type Item;
    /// The resulting sequence type.
    type IntoSeq: Sequence<Item = Self::Item>;

    /// Performs the conversion.
    fn into_seq(self) -> Self::IntoSeq;
}

impl<S: Sequence> IntoSequence for S {
    type Item = S::Item;
    type IntoSeq = S;

    fn into_seq(self) -> S {
        self
    }
}

/// Iterator over a sequence's elements, created by [`Sequence::results`].
///
/// Each step yields `Some(Ok(item))`, `Some(Err(e))` for a failed element, or
/// `None` once the sequence reports exhaustion.
#[derive(Debug, Clone)]
pub struct Results<S> {
    seq: S,
}

impl<S> Results<S> {
    /// Returns the underlying sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for Results<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seq.has_next() {
            Some(self.seq.advance())
        } else {
            None
        }
    }
}

impl<S: Sequence> FusedIterator for Results<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, from_vec, of};

    #[test]
    fn remove_is_unsupported() {
        let mut seq = of![1, 2];
        assert_eq!(
            seq.remove(),
            Err(SeqError::Unsupported {
                operation: "remove"
            })
        );
        assert_eq!(seq.to_list().unwrap(), vec![1, 2]);
    }

    #[test]
    fn count_traverses_stages_like_drain() {
        let mut pulled = 0;
        let seq = of![1, 2, 3, 4].map(|n| {
            pulled += 1;
            n
        });
        assert_eq!(seq.filter(|n| *n != 2).count().unwrap(), 3);
        assert_eq!(pulled, 4);
        assert_eq!(of![1, 2, 3].filter(|n| *n != 2).drain().unwrap(), 2);
    }

    #[test]
    fn by_ref_allows_partial_consumption() {
        let mut seq = of![1, 2, 3];
        assert_eq!(seq.by_ref().single().unwrap(), 1);
        assert_eq!(seq.to_list().unwrap(), vec![2, 3]);
    }

    #[test]
    fn results_bridge() {
        let collected: Result<Vec<i32>> = of![1, 2, 3].results().collect();
        assert_eq!(collected.unwrap(), vec![1, 2, 3]);

        let mut iter = empty::<i32>().results();
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn max_and_min() {
        assert_eq!(of![3, 1, 4, 1, 5].max().unwrap(), Some(5));
        assert_eq!(of![3, 1, 4, 1, 5].min().unwrap(), Some(1));
        assert_eq!(empty::<i32>().max().unwrap(), None);
        assert_eq!(empty::<i32>().min().unwrap(), None);
    }

    #[test]
    fn max_ties_keep_earliest() {
        let pairs = from_vec(vec![(2, "a"), (1, "b"), (2, "c")]);
        let best = pairs.max_by(|x, y| x.0.cmp(&y.0)).unwrap();
        assert_eq!(best, Some((2, "a")));
    }

    #[test]
    fn min_ties_keep_earliest() {
        let pairs = from_vec(vec![(1, "a"), (3, "b"), (1, "c")]);
        let best = pairs.min_by(|x, y| x.0.cmp(&y.0)).unwrap();
        assert_eq!(best, Some((1, "a")));
    }

    #[test]
    fn single() {
        assert_eq!(of![7, 8].single().unwrap(), 7);
        assert_eq!(empty::<i32>().single(), Err(SeqError::Exhausted));
    }

    #[test]
    fn concat() {
        assert_eq!(empty::<&str>().concat(Some(",")).unwrap(), "");
        assert_eq!(of!["x"].concat(Some(",")).unwrap(), "x");
        assert_eq!(of!["x", "y"].concat(Some(",")).unwrap(), "x,y");
        assert_eq!(of![1, 2, 3].concat(None).unwrap(), "123");
    }

    #[test]
    fn to_map_last_write_wins() {
        let map = of!["apple", "avocado", "banana"]
            .to_map(|s| s.chars().next())
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&Some('a')], "avocado");
        assert_eq!(map[&Some('b')], "banana");
    }

    #[test]
    fn try_to_map_requires_key() {
        let key: Option<fn(&i32) -> i32> = None;
        assert_eq!(
            of![1].try_to_map(key),
            Err(SeqError::MissingArgument { name: "key" })
        );
    }

    #[test]
    fn to_stack_puts_last_on_top() {
        let mut stack = of![1, 2, 3].to_stack().unwrap();
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
    }

    #[test]
    fn boxed_sequences_compose() {
        let boxed: BoxedSequence<'_, i32> = of![1, 2, 3].filter(|n| *n > 1).boxed();
        assert_eq!(boxed.to_list().unwrap(), vec![2, 3]);
    }
}
