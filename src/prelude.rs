//! Commonly used imports
//!
//! Use `use iterables::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Cursor, SeqError, Sequence};

// Sources
pub use crate::cursor::IterCursor;
pub use crate::sequence::{empty, from_fn, single_use};

// Builders
pub use crate::builder::{eager, lazy, Eager, Lazy};

// Predicates
pub use crate::predicate::{Partial, Predicate, Total};

// Progressions
pub use crate::progression::{progression, EpochMillis, Identity, ProgressionSpec, Resolver};

// Grouping
pub use crate::grouping::{Group, Grouping};
