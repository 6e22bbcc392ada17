//! Identity comparison for shared references and pointers.

use std::rc::Rc;
use std::sync::Arc;

/// Types whose values can be compared by identity rather than by content.
///
/// Used by [`Sequence::contains`](crate::Sequence::contains): two equal but
/// distinct objects are *not* the same.
///
/// ```
/// use std::rc::Rc;
/// use standout_seq::{from_vec, Sequence};
///
/// let shared = Rc::new(String::from("x"));
/// let lookalike = Rc::new(String::from("x"));
///
/// let seq = from_vec(vec![Rc::clone(&shared)]);
/// assert!(seq.contains(&shared).unwrap());
///
/// let seq = from_vec(vec![Rc::clone(&shared)]);
/// assert!(!seq.contains(&lookalike).unwrap());
/// ```
pub trait Identity {
    /// Returns `true` if `self` and `other` refer to the same object.
    fn is_same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for &T {
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_slice, of, Sequence};

    #[test]
    fn references_compare_by_address() {
        let items = [String::from("a"), String::from("a")];
        assert!(from_slice(&items).contains(&&items[1]).unwrap());

        let outsider = String::from("a");
        assert!(!from_slice(&items).contains(&&outsider).unwrap());
    }

    #[test]
    fn arc_clones_are_the_same() {
        let first = Arc::new(3);
        let second = Arc::new(3);
        assert!(first.is_same(&Arc::clone(&first)));
        assert!(!first.is_same(&second));
    }

    #[test]
    fn empty_sequence_contains_nothing() {
        let needle = Rc::new(0);
        let seq = of![Rc::new(0)].filter(|_| false);
        assert!(!seq.contains(&needle).unwrap());
    }
}
