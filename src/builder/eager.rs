//! Eager builder: buffered filtering and whole-source grouping.
//!
//! [`Eager`] offers fewer operators than [`Lazy`](crate::Lazy). Its `filter`
//! yields an [`Anonymous`] sequence meant to be materialized, and its
//! `group_by` drains the source on the spot. The filter cursor is the same
//! [`Filter`](crate::primitives::Filter) the lazy builder uses.
//!
//! # Examples
//!
//! ```rust
//! use iterables::prelude::*;
//!
//! let names = vec!["ada", "bob", "al", "cy"];
//! let starts_with_a = eager(names.clone()).filter(|n: &&str| n.starts_with('a'));
//! assert_eq!(starts_with_a.to_list(), vec!["ada", "al"]);
//!
//! let by_len = eager(names).group_by(|n: &&str| n.len());
//! assert_eq!(by_len.keys().copied().collect::<Vec<_>>(), vec![3, 2]);
//! ```

use std::fmt;

use either::Either;

use crate::{
    builder::{lazy::lazy, steps::Filtered, Lazy},
    grouping::{group_cursor, try_group_cursor, Grouping},
    predicate::{Partial, Total},
    sequence::{empty, Empty, Sequence},
};

/// Entry point for buffered filtering and grouping over a [`Sequence`].
#[derive(Clone)]
pub struct Eager<S> {
    source: S,
}

/// Wrap `source` in an eager builder.
pub fn eager<S>(source: S) -> Eager<S>
where
    S: Sequence,
{
    Eager { source }
}

impl<S> Eager<Either<S, Empty<S::Item>>>
where
    S: Sequence,
{
    /// Wrap an optional source; a missing source behaves as an empty one.
    pub fn from_option(source: Option<S>) -> Self {
        let source = match source {
            Some(source) => Either::Left(source),
            None => Either::Right(empty()),
        };
        eager(source)
    }
}

impl<S> Eager<S>
where
    S: Sequence,
{
    /// Elements the predicate accepts, as a materializable sequence.
    pub fn filter<F>(self, predicate: F) -> Anonymous<Filtered<S, Total<F>>>
    where
        F: Fn(&S::Item) -> bool,
    {
        Anonymous(Filtered {
            source: self.source,
            predicate: Total(predicate),
        })
    }

    /// Like [`filter`](Self::filter), with a predicate that may fail. A failure
    /// ends that traversal quietly.
    pub fn try_filter<F, E>(self, predicate: F) -> Anonymous<Filtered<S, Partial<F>>>
    where
        F: Fn(&S::Item) -> Result<bool, E>,
        E: fmt::Debug,
    {
        Anonymous(Filtered {
            source: self.source,
            predicate: Partial(predicate),
        })
    }

    /// Drain the source, grouping its elements by `key_fn`.
    pub fn group_by<K, F>(&self, key_fn: F) -> Grouping<K, S::Item>
    where
        K: PartialEq,
        F: FnMut(&S::Item) -> K,
    {
        group_cursor(self.source.cursor(), key_fn)
    }

    /// Drain the source, grouping by a key function that may fail. The first
    /// failure aborts the grouping and is returned.
    pub fn try_group_by<K, E, F>(&self, key_fn: F) -> Result<Grouping<K, S::Item>, E>
    where
        K: PartialEq,
        E: fmt::Debug,
        F: FnMut(&S::Item) -> Result<K, E>,
    {
        try_group_cursor(self.source.cursor(), key_fn)
    }

    /// Unwrap the underlying sequence.
    pub fn into_inner(self) -> S {
        self.source
    }
}

/// Sequence produced by an eager operator, ready to be materialized.
#[derive(Clone)]
pub struct Anonymous<S>(S);

impl<S> Anonymous<S>
where
    S: Sequence,
{
    /// Drain one traversal into a vector.
    pub fn to_list(&self) -> Vec<S::Item> {
        self.0.items().collect()
    }

    /// Drain one traversal into a boxed slice.
    pub fn to_array(&self) -> Box<[S::Item]> {
        self.to_list().into_boxed_slice()
    }

    /// Continue with the lazy operators.
    pub fn into_lazy(self) -> Lazy<S> {
        lazy(self.0)
    }
}

impl<S> Sequence for Anonymous<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.0.cursor()
    }
}
