//! Lazy builder, closed under composition.
//!
//! Every non-terminal operator on [`Lazy`] returns another `Lazy`, so chains
//! can be arbitrarily deep. Building a chain touches nothing: the source is only
//! traversed when a terminal operator (`to_list`, `first_or_default`,
//! `group_by`) runs, and each terminal starts its own fresh traversal.
//!
//! # Examples
//!
//! ```rust
//! use iterables::prelude::*;
//!
//! let chain = lazy(from_fn(|| 1..))
//!     .filter(|x: &u32| x % 2 == 1)
//!     .skip(1)
//!     .take(3)
//!     .map(|x| x * 10);
//!
//! assert_eq!(chain.to_list(), vec![30, 50, 70]);
//! assert_eq!(chain.first_or_default(), Some(30));
//! ```

use std::fmt;

use crate::{
    builder::steps::{Filtered, Mapped, Sampled, Selected, Skipped, Taken, TakenWhile},
    cursor::Cursor,
    grouping::{group_cursor, try_group_cursor, Grouping},
    predicate::{Partial, Total},
    sequence::Sequence,
};

/// Fluent, deferred view over a [`Sequence`].
///
/// `Lazy` is itself a `Sequence`, so it can feed another builder.
#[derive(Clone)]
pub struct Lazy<S> {
    source: S,
}

/// Wrap `source` in a lazy builder.
pub fn lazy<S>(source: S) -> Lazy<S>
where
    S: Sequence,
{
    Lazy { source }
}

impl<S> Lazy<S>
where
    S: Sequence,
{
    /// Keep the elements `predicate` accepts.
    pub fn filter<F>(self, predicate: F) -> Lazy<Filtered<S, Total<F>>>
    where
        F: Fn(&S::Item) -> bool,
    {
        lazy(Filtered {
            source: self.source,
            predicate: Total(predicate),
        })
    }

    /// Keep the elements the fallible `predicate` accepts; a failure ends the
    /// traversal quietly.
    pub fn try_filter<F, E>(self, predicate: F) -> Lazy<Filtered<S, Partial<F>>>
    where
        F: Fn(&S::Item) -> Result<bool, E>,
        E: fmt::Debug,
    {
        lazy(Filtered {
            source: self.source,
            predicate: Partial(predicate),
        })
    }

    /// Drop the first `count` elements.
    pub fn skip(self, count: usize) -> Lazy<Skipped<S>> {
        lazy(Skipped {
            source: self.source,
            count,
        })
    }

    /// Keep at most the first `count` elements.
    pub fn take(self, count: usize) -> Lazy<Taken<S>> {
        lazy(Taken {
            source: self.source,
            count,
        })
    }

    /// Keep elements up to the first one `predicate` rejects.
    pub fn take_while<F>(self, predicate: F) -> Lazy<TakenWhile<S, Total<F>>>
    where
        F: Fn(&S::Item) -> bool,
    {
        lazy(TakenWhile {
            source: self.source,
            predicate: Total(predicate),
        })
    }

    /// Like [`take_while`](Self::take_while), with a predicate that may fail;
    /// a failure ends the run.
    pub fn try_take_while<F, E>(self, predicate: F) -> Lazy<TakenWhile<S, Partial<F>>>
    where
        F: Fn(&S::Item) -> Result<bool, E>,
        E: fmt::Debug,
    {
        lazy(TakenWhile {
            source: self.source,
            predicate: Partial(predicate),
        })
    }

    /// Keep every `factor`-th element, starting with the first. Zero acts as one.
    pub fn sample(self, factor: usize) -> Lazy<Sampled<S>> {
        lazy(Sampled {
            source: self.source,
            factor,
        })
    }

    /// Transform every element.
    pub fn map<U, F>(self, f: F) -> Lazy<Mapped<S, F>>
    where
        F: Fn(S::Item) -> U,
    {
        lazy(Mapped {
            source: self.source,
            f,
        })
    }

    /// Transform every element with a function that may fail; failed elements
    /// come out as `None` instead of stopping the traversal.
    pub fn select<U, E, F>(self, f: F) -> Lazy<Selected<S, F>>
    where
        F: Fn(S::Item) -> Result<U, E>,
        E: fmt::Debug,
    {
        lazy(Selected {
            source: self.source,
            f,
        })
    }

    /// Drain one fresh traversal into a vector, in encounter order.
    pub fn to_list(&self) -> Vec<S::Item> {
        let list: Vec<_> = self.source.items().collect();
        tracing::trace!(len = list.len(), "lazy chain drained");
        list
    }

    /// First element, or `None` for an empty sequence. Pulls at most one
    /// element.
    pub fn first_or_default(&self) -> Option<S::Item> {
        let mut cursor = self.source.cursor();
        if cursor.has_next() {
            cursor.try_next().ok()
        } else {
            None
        }
    }

    /// Group one fresh traversal by `key_fn`.
    pub fn group_by<K, F>(&self, key_fn: F) -> Grouping<K, S::Item>
    where
        K: PartialEq,
        F: FnMut(&S::Item) -> K,
    {
        group_cursor(self.source.cursor(), key_fn)
    }

    /// Group one fresh traversal by the fallible `key_fn`, aborting on the
    /// first failure.
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

impl<S> Sequence for Lazy<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::eager,
        error::SeqError,
        sequence::{empty, from_fn, single_use},
    };
    use std::cell::Cell;

    #[test]
    fn test_chain_is_deferred() {
        let (traversals, pulled) = (&Cell::new(0), &Cell::new(0));
        let source = from_fn(move || {
            traversals.set(traversals.get() + 1);
            (0..100).inspect(move |_| pulled.set(pulled.get() + 1))
        });

        let chain = lazy(source).filter(|x: &i32| x % 2 == 0).take(5).skip(1);
        assert_eq!(traversals.get(), 0);
        assert_eq!(pulled.get(), 0);

        assert_eq!(chain.to_list(), vec![2, 4, 6, 8]);
        assert_eq!(traversals.get(), 1);
        assert!(pulled.get() <= 10);
    }

    #[test]
    fn test_every_terminal_starts_fresh() {
        let chain = lazy(vec![3, 1, 4, 1, 5]).skip(1);
        assert_eq!(chain.to_list(), vec![1, 4, 1, 5]);
        assert_eq!(chain.to_list(), vec![1, 4, 1, 5]);
        assert_eq!(chain.first_or_default(), Some(1));
    }

    #[test]
    fn test_first_or_default_on_empty() {
        assert_eq!(lazy(empty::<i32>()).first_or_default(), None);
        assert_eq!(lazy(vec![1, 2]).filter(|x: &i32| *x > 5).first_or_default(), None);
    }

    #[test]
    fn test_first_or_default_pulls_one() {
        let pulled = &Cell::new(0);
        let source = from_fn(move || (0..).inspect(move |_| pulled.set(pulled.get() + 1)));
        assert_eq!(lazy(source).first_or_default(), Some(0));
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_take_while_regression() {
        let list = lazy(vec![1, 1, 2, 1]).take_while(|x: &i32| *x == 1).to_list();
        assert_eq!(list, vec![1, 1]);
    }

    #[test]
    fn test_try_take_while_failure_ends_run() {
        let list = lazy(vec![1, 2, 3, 4])
            .try_take_while(|x: &i32| if *x == 3 { Err("three") } else { Ok(true) })
            .to_list();
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn test_try_filter_fails_closed() {
        let list = lazy(vec!["1", "2", "x", "4"])
            .try_filter(|s: &&str| s.parse::<i32>().map(|n| n > 1))
            .to_list();
        assert_eq!(list, vec!["2"]);
    }

    #[test]
    fn test_select_is_lenient() {
        let list = lazy(vec!["1", "x", "3"]).select(|s: &str| s.parse::<u8>()).to_list();
        assert_eq!(list, vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn test_sample_and_map() {
        let list = lazy(from_fn(|| 0..10)).sample(4).map(|x| x * x).to_list();
        assert_eq!(list, vec![0, 16, 64]);
    }

    #[test]
    fn test_take_of_skip_zero_is_empty() {
        assert!(lazy(vec![1, 2, 3]).skip(1).take(0).to_list().is_empty());
    }

    #[test]
    fn test_group_by() {
        let grouping = lazy(vec!['A', 'B', 'A', 'C', 'B']).group_by(|c| *c);
        let keys: Vec<_> = grouping.keys().copied().collect();
        assert_eq!(keys, vec!['A', 'B', 'C']);
        assert_eq!(grouping.get(&'A').map(|g| g.len()), Some(2));
        assert_eq!(grouping.get(&'C').map(|g| g.len()), Some(1));
    }

    #[test]
    fn test_try_group_by_aborts() {
        let result = lazy(vec![1, 2, 3]).try_group_by(|x| if *x == 2 { Err(*x) } else { Ok(*x) });
        assert_eq!(result.map(|g| g.len()), Err(2));
    }

    #[test]
    fn test_lazy_feeds_another_builder() {
        let inner = lazy(vec![1, 2, 3, 4, 5, 6]).filter(|x: &i32| x % 2 == 0);
        let outer = lazy(&inner).map(|x| x + 1);
        assert_eq!(outer.to_list(), vec![3, 5, 7]);
        let grouping = eager(inner).group_by(|x| *x > 2);
        assert_eq!(grouping.len(), 2);
    }

    #[test]
    fn test_single_use_source_is_single_pass() {
        let chain = lazy(single_use(0..4)).take(2);
        assert_eq!(chain.to_list(), vec![0, 1]);
        assert_eq!(chain.to_list(), vec![2, 3]);
        assert!(chain.to_list().is_empty());
    }

    #[test]
    fn test_cursor_errors_surface() {
        let chain = lazy(vec![1]).take(1);
        let mut cursor = chain.cursor();
        assert_eq!(cursor.try_next(), Ok(1));
        assert_eq!(cursor.try_next(), Err(SeqError::Exhausted));
    }
}
