//! Element type conversion stages.
//!
//! [`Cast`] converts through `TryFrom`; [`Convert`] takes an arbitrary
//! fallible function. Both are lazy: a failed conversion surfaces as
//! [`SeqError`] from the `advance` that reached the offending element, and
//! the sequence stays usable afterwards.

use std::any::type_name;
use std::marker::PhantomData;

use crate::error::{Result, SeqError};
use crate::sequence::Sequence;

/// Converts each element to `O` with [`TryFrom`].
///
/// Created by [`Sequence::cast`].
///
/// ```
/// use standout_seq::{of, SeqError, Sequence};
///
/// let mut bytes = of![7i32, 300].cast::<u8>();
/// assert_eq!(bytes.advance().unwrap(), 7);
/// assert!(matches!(bytes.advance(), Err(SeqError::Cast { to: "u8", .. })));
/// ```
pub struct Cast<S, O> {
    upstream: S,
    _target: PhantomData<fn() -> O>,
}

impl<S, O> Cast<S, O> {
    pub(crate) fn new(upstream: S) -> Self {
        Cast {
            upstream,
            _target: PhantomData,
        }
    }
}

impl<S, O> Sequence for Cast<S, O>
where
    S: Sequence,
    O: TryFrom<S::Item>,
{
    type Item = O;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn advance(&mut self) -> Result<O> {
        let item = self.upstream.advance()?;
        O::try_from(item).map_err(|_| SeqError::Cast {
            from: type_name::<S::Item>(),
            to: type_name::<O>(),
        })
    }
}

/// Converts each element with a fallible function.
///
/// Created by [`Sequence::convert`].
pub struct Convert<S, F> {
    upstream: S,
    conversion: F,
}

impl<S, F> Convert<S, F> {
    pub(crate) fn new(upstream: S, conversion: F) -> Self {
        Convert {
            upstream,
            conversion,
        }
    }
}

impl<S, F, O> Sequence for Convert<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<O>,
{
    type Item = O;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn advance(&mut self) -> Result<O> {
        self.upstream.advance().and_then(&mut self.conversion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::of;

    #[test]
    fn widening_cast() {
        let wide = of![1u8, 2, 255].cast::<u32>().to_list().unwrap();
        assert_eq!(wide, vec![1u32, 2, 255]);
    }

    #[test]
    fn failed_cast_names_both_types() {
        let mut seq = of![-1i64].cast::<u16>();
        assert!(seq.has_next());
        assert_eq!(
            seq.advance(),
            Err(SeqError::Cast {
                from: "i64",
                to: "u16"
            })
        );
        assert!(!seq.has_next());
    }

    #[test]
    fn failure_is_per_element() {
        let mut seq = of![1i32, -5, 3].cast::<usize>();
        assert_eq!(seq.advance().unwrap(), 1);
        assert!(seq.advance().is_err());
        assert_eq!(seq.advance().unwrap(), 3);
    }

    #[test]
    fn terminal_stops_at_first_failure() {
        let result = of![10i32, 1000, 20].cast::<i8>().to_list();
        assert!(matches!(result, Err(SeqError::Cast { .. })));
    }

    #[test]
    fn convert_with_function() {
        let mut parsed = of!["4", "x", "2"]
            .convert(|s| {
                s.parse::<u32>()
                    .map_err(|e| SeqError::invalid("item", e.to_string()))
            })
            .filter(|_| true);
        assert!(parsed.has_next());
        assert_eq!(parsed.advance().unwrap(), 4);
        assert!(parsed.has_next());
        assert!(matches!(
            parsed.advance(),
            Err(SeqError::InvalidArgument { name: "item", .. })
        ));
        assert!(parsed.has_next());
        assert_eq!(parsed.advance().unwrap(), 2);
    }
}
