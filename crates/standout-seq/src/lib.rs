//! Seq - Lazy, single-pass sequence combinators.
//!
//! Seq provides a small set of composable stages over anything that can be
//! traversed once, in order. It supports:
//!
//! - Look-ahead filtering with an idempotent `has_next`
//! - One-to-one mapping and lazy, per-element type conversion
//! - Concatenation of several sequences (`union`) and of a sequence of
//!   sequences (`flatten`), both iterative regardless of how many empty
//!   sub-sequences appear in a row
//! - Fixed-size batching (`group`)
//! - Terminal operations: count, membership, list, stack, map, min/max,
//!   single element and string concatenation
//!
//! # Quick Start
//!
//! ```rust
//! use standout_seq::{of, union, Sequence};
//!
//! let words = of!["alpha", "beta", "gamma", "delta"];
//!
//! let long = words
//!     .filter(|w| w.len() > 4)
//!     .map(str::to_uppercase)
//!     .concat(Some(","))
//!     .unwrap();
//! assert_eq!(long, "ALPHA,GAMMA,DELTA");
//!
//! let batches = union![of![1, 2, 3], vec![4, 5], None::<Vec<i32>>]
//!     .group(2)
//!     .unwrap()
//!     .to_list()
//!     .unwrap();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```
//!
//! # Traversal Protocol
//!
//! ```text
//! while seq.has_next() {
//!     let item = seq.advance()?;
//! }
//! ```
//!
//! - `has_next` may be called any number of times; it never skips or
//!   duplicates an element
//! - `advance` past the end fails with [`SeqError::Exhausted`]
//! - `remove` always fails with [`SeqError::Unsupported`]
//! - Filtering stages hand out the element found by the last positive
//!   `has_next`; advancing them without one fails with [`SeqError::Protocol`]
//!
//! # Components
//!
//! | Kind | Items |
//! |------|-------|
//! | Sources | [`empty`], [`once`], [`of!`], [`from_vec`], [`from_slice`], [`from_iter`], [`from_option`], [`from_stack`], [`drain_stack`], [`indexed`] |
//! | Stages | [`Filter`], [`FilterSome`], [`Map`], [`Union`], [`Flatten`], [`Group`], [`Cast`], [`Convert`] |
//! | Terminals | `count`, `drain`, `contains`, `to_list`, `to_stack`, `to_map`, `min`, `max`, `single`, `concat` |
//!
//! Absent inputs are handled at the edges: `None` passed where a sequence is
//! expected behaves as an empty sequence, and absent required functions are
//! rejected when the stage is built, never mid-traversal.

mod cast;
mod error;
mod filter;
mod flatten;
mod group;
mod map;
mod same;
mod sequence;
mod source;
mod stack;
mod union;

// Re-export public API
pub use cast::{Cast, Convert};
pub use error::{Result, SeqError};
pub use filter::{Filter, FilterSome};
pub use flatten::Flatten;
pub use group::Group;
pub use map::{identity, Map};
pub use same::Identity;
pub use sequence::{BoxedSequence, IntoSequence, Results, Sequence};
pub use source::{
    drain_stack, empty, from_iter, from_option, from_slice, from_stack, from_vec, indexed, once,
    Elements, Empty, FromIter, Indexed, Once, OrEmpty, Unstack,
};
pub use stack::Stack;
pub use union::Union;
