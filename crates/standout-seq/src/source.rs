//! Source normalization.
//!
//! Adapts heterogeneous inputs into sequences:
//!
//! | Input | Sequence |
//! |-------|----------|
//! | nothing | [`empty`] |
//! | one value | [`once`] |
//! | value + varargs | [`of!`](crate::of!) |
//! | `Vec<T>`, `[T; N]`, `&[T]` | [`Elements`] in index order |
//! | any std iterator | [`from_iter`] |
//! | `Option<_>` | [`OrEmpty`]; `None` is empty |
//! | a [`Stack`] | [`Unstack`], drained top to bottom |
//! | an index range | [`indexed`] |

use std::borrow::BorrowMut;
use std::fmt;
use std::iter::Peekable;
use std::marker::PhantomData;

use crate::error::{Result, SeqError};
use crate::sequence::{IntoSequence, Sequence};
use crate::stack::Stack;

// ============================================================================
// Empty
// ============================================================================

/// The always-empty sequence.
///
/// Zero-sized and stateless, so every empty sequence is interchangeable.
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

/// Returns the empty sequence.
pub fn empty<T>() -> Empty<T> {
    Empty { _item: PhantomData }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        false
    }

    fn advance(&mut self) -> Result<T> {
        Err(SeqError::Exhausted)
    }

    fn count(self) -> Result<usize> {
        Ok(0)
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

// ============================================================================
// Once
// ============================================================================

/// A sequence of exactly one element.
#[derive(Debug, Clone)]
pub struct Once<T> {
    item: Option<T>,
}

/// Returns a sequence yielding `item` once.
pub fn once<T>(item: T) -> Once<T> {
    Once { item: Some(item) }
}

impl<T> Sequence for Once<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.item.is_some()
    }

    fn advance(&mut self) -> Result<T> {
        self.item.take().ok_or(SeqError::Exhausted)
    }
}

// ============================================================================
// Elements
// ============================================================================

/// A sequence over an exactly-sized collection, in index order.
///
/// The size is tracked structurally, so [`Sequence::count`] does not
/// traverse.
#[derive(Debug, Clone)]
pub struct Elements<I> {
    iter: I,
}

impl<I: ExactSizeIterator> Elements<I> {
    fn new(iter: I) -> Self {
        Elements { iter }
    }

    /// Returns the number of elements not yet consumed.
    pub fn remaining(&self) -> usize {
        self.iter.len()
    }
}

impl<I: ExactSizeIterator> Sequence for Elements<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.iter.len() > 0
    }

    fn advance(&mut self) -> Result<I::Item> {
        self.iter.next().ok_or(SeqError::Exhausted)
    }

    fn count(self) -> Result<usize> {
        Ok(self.iter.len())
    }
}

/// Returns a sequence over the vector's elements.
pub fn from_vec<T>(items: Vec<T>) -> Elements<std::vec::IntoIter<T>> {
    Elements::new(items.into_iter())
}

/// Returns a sequence over references to the slice's elements.
pub fn from_slice<T>(items: &[T]) -> Elements<std::slice::Iter<'_, T>> {
    Elements::new(items.iter())
}

/// Builds a sequence from one value plus optional further values.
///
/// ```
/// use standout_seq::{of, Sequence};
///
/// assert_eq!(of![1].to_list().unwrap(), vec![1]);
/// assert_eq!(of![1, 2, 3].to_list().unwrap(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! of {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::from_vec(::std::vec![$first $(, $rest)*])
    };
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type IntoSeq = Elements<std::vec::IntoIter<T>>;

    fn into_seq(self) -> Self::IntoSeq {
        from_vec(self)
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type IntoSeq = Elements<std::array::IntoIter<T, N>>;

    fn into_seq(self) -> Self::IntoSeq {
        Elements::new(self.into_iter())
    }
}

impl<'a, T> IntoSequence for &'a [T] {
    type Item = &'a T;
    type IntoSeq = Elements<std::slice::Iter<'a, T>>;

    fn into_seq(self) -> Self::IntoSeq {
        from_slice(self)
    }
}

impl<'a, T> IntoSequence for &'a Vec<T> {
    type Item = &'a T;
    type IntoSeq = Elements<std::slice::Iter<'a, T>>;

    fn into_seq(self) -> Self::IntoSeq {
        from_slice(self)
    }
}

// ============================================================================
// FromIter
// ============================================================================

/// A sequence over any std iterator, with one element of look-ahead.
pub struct FromIter<I: Iterator> {
    iter: Peekable<I>,
}

/// Adapts a std iterator (or anything iterable) into a sequence.
pub fn from_iter<I: IntoIterator>(items: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: items.into_iter().peekable(),
    }
}

impl<I: Iterator> Sequence for FromIter<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    fn advance(&mut self) -> Result<I::Item> {
        self.iter.next().ok_or(SeqError::Exhausted)
    }
}

// ============================================================================
// OrEmpty
// ============================================================================

/// A sequence that may be absent; absence behaves as the empty sequence.
#[derive(Debug, Clone)]
pub struct OrEmpty<S> {
    inner: Option<S>,
}

/// Normalizes a possibly absent input. `None` yields the empty sequence.
pub fn from_option<I: IntoSequence>(input: Option<I>) -> OrEmpty<I::IntoSeq> {
    OrEmpty {
        inner: input.map(IntoSequence::into_seq),
    }
}

impl<S: Sequence> Sequence for OrEmpty<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        self.inner.as_mut().is_some_and(Sequence::has_next)
    }

    fn advance(&mut self) -> Result<S::Item> {
        match self.inner.as_mut() {
            Some(seq) => seq.advance(),
            None => Err(SeqError::Exhausted),
        }
    }

    fn count(self) -> Result<usize> {
        match self.inner {
            Some(seq) => seq.count(),
            None => Ok(0),
        }
    }
}

impl<I: IntoSequence> IntoSequence for Option<I> {
    type Item = I::Item;
    type IntoSeq = OrEmpty<I::IntoSeq>;

    fn into_seq(self) -> Self::IntoSeq {
        from_option(self)
    }
}

// ============================================================================
// Unstack
// ============================================================================

/// Drains a [`Stack`] destructively, top to bottom.
///
/// Each advance pops one element; after full traversal the stack is empty.
pub struct Unstack<B, T> {
    stack: B,
    _item: PhantomData<fn() -> T>,
}

/// Drains a borrowed stack; the caller's stack is empty afterwards.
///
/// ```
/// use standout_seq::{drain_stack, Sequence, Stack};
///
/// let mut stack: Stack<i32> = vec![1, 2, 3].into();
/// let popped = drain_stack(&mut stack).to_list().unwrap();
///
/// assert_eq!(popped, vec![3, 2, 1]);
/// assert!(stack.is_empty());
/// ```
pub fn drain_stack<T>(stack: &mut Stack<T>) -> Unstack<&mut Stack<T>, T> {
    Unstack {
        stack,
        _item: PhantomData,
    }
}

/// Drains a possibly absent stack. `None` yields the empty sequence.
pub fn from_stack<T>(stack: Option<&mut Stack<T>>) -> OrEmpty<Unstack<&mut Stack<T>, T>> {
    OrEmpty {
        inner: stack.map(drain_stack),
    }
}

impl<B: BorrowMut<Stack<T>>, T> Sequence for Unstack<B, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        !self.stack.borrow().is_empty()
    }

    fn advance(&mut self) -> Result<T> {
        self.stack.borrow_mut().pop().ok_or(SeqError::Exhausted)
    }
}

impl<T> IntoSequence for Stack<T> {
    type Item = T;
    type IntoSeq = Unstack<Stack<T>, T>;

    fn into_seq(self) -> Self::IntoSeq {
        Unstack {
            stack: self,
            _item: PhantomData,
        }
    }
}

// ============================================================================
// Indexed
// ============================================================================

/// Yields `f(0)`, `f(1)`, ... `f(count - 1)`, computing each on demand.
#[derive(Clone)]
pub struct Indexed<F> {
    index: usize,
    count: usize,
    f: F,
}

/// Returns an index-based sequence of `count` elements produced by `f`.
pub fn indexed<T, F>(count: usize, f: F) -> Indexed<F>
where
    F: FnMut(usize) -> T,
{
    Indexed { index: 0, count, f }
}

impl<F> Indexed<F> {
    /// Returns the index of the next element to be produced.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T, F: FnMut(usize) -> T> Sequence for Indexed<F> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.index < self.count
    }

    fn advance(&mut self) -> Result<T> {
        if self.index >= self.count {
            return Err(SeqError::Exhausted);
        }
        let item = (self.f)(self.index);
        self.index += 1;
        Ok(item)
    }

    fn count(self) -> Result<usize> {
        Ok(self.count - self.index)
    }
}
