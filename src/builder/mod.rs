//! Fluent entry points over sequences.
//!
//! [`Eager`] covers buffered filtering and grouping; [`Lazy`] is the full
//! operator set, closed under composition. Both build the anonymous sequences
//! in [`steps`].

mod eager;
mod lazy;
pub mod steps;

pub use eager::{eager, Anonymous, Eager};
pub use lazy::{lazy, Lazy};
