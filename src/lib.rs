//! # Iterables: a lazy sequence algebra
//!
//! Compose filters, slices, samples and transformations over any sequence
//! without materializing intermediate results, then finish with a consuming
//! operator.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: anything that can start a traversal
//! - **[`Cursor`]**: a traversal in progress, with a repeatable `has_next`
//!
//! ## Key Features
//!
//! - **Lazy**: chains built with [`lazy`] run nothing until a terminal operator
//! - **Single lookahead**: no cursor reads more than one element ahead
//! - **Progressions**: arithmetic sequences of any position type via a [`Resolver`]
//! - **Grouping**: insertion-ordered groups keyed by any `PartialEq` key
//!
//! ## Example
//!
//! ```
//! use iterables::prelude::*;
//!
//! let readings = vec![3, -1, 7, 12, 5, 40, 9];
//! let chain = lazy(readings)
//!     .filter(|r: &i32| *r >= 0)
//!     .take_while(|r: &i32| *r < 40)
//!     .map(|r| r * 2);
//!
//! assert_eq!(chain.to_list(), vec![6, 14, 24, 10]);
//!
//! let parity = chain.group_by(|r| r % 4 == 0);
//! assert_eq!(parity.len(), 2);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`from_fn(f)`] - restartable sequence from a closure returning an iterator
//! - [`single_use(iter)`] - one shared iterator; traversals resume each other
//! - [`empty()`] - nothing at all
//! - [`progression(start, count, step, resolver)`] - arithmetic progression cursor
//!
//! **Builders:**
//! - [`lazy(seq)`] - every operator, deferred
//! - [`eager(seq)`] - buffered filter and immediate grouping

pub mod builder;
pub mod cursor;
pub mod error;
pub mod fault;
pub mod grouping;
pub mod lookahead;
pub mod predicate;
pub mod prelude;
pub mod primitives;
pub mod progression;
pub mod sequence;

pub use builder::{eager, lazy, Anonymous, Eager, Lazy};
pub use cursor::{Cursor, Items, IterCursor};
pub use error::SeqError;
pub use grouping::{Group, Grouping};
pub use progression::{progression, EpochMillis, Identity, Progression, ProgressionSpec, Resolver};
pub use sequence::{empty, from_fn, single_use, Sequence};
