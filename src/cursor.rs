//! Core cursor protocol.
//!
//! A [`Cursor`] is the pull side of a [`Sequence`](crate::Sequence): it answers
//! "is there more?", hands out the next element, and may retract the element it
//! produced last. Unlike [`Iterator`], asking whether more elements exist is a
//! separate, repeatable query, which is what lets lookahead cursors buffer a
//! value without losing it.
//!
//! # Examples
//!
//! ```rust
//! use iterables::prelude::*;
//!
//! let mut cursor = IterCursor::new(vec![1, 2]);
//! assert!(cursor.has_next());
//! assert!(cursor.has_next());
//! assert_eq!(cursor.try_next(), Ok(1));
//! assert_eq!(cursor.try_next(), Ok(2));
//! assert_eq!(cursor.try_next(), Err(SeqError::Exhausted));
//! ```

use either::Either;

use crate::{error::SeqError, lookahead::Lookahead};

/// Stateful, exclusively owned position within a sequence.
///
/// Implementations must keep `has_next` free of observable effects: calling it
/// any number of times must not change what `try_next` returns next.
pub trait Cursor {
    /// Element type produced by the cursor.
    type Item;

    /// Returns `true` when `try_next` would produce an element.
    fn has_next(&mut self) -> bool;

    /// Produces the next element, or [`SeqError::Exhausted`] when none is left.
    fn try_next(&mut self) -> Result<Self::Item, SeqError>;

    /// Retracts the element produced last.
    ///
    /// Semantics vary per cursor; the default refuses the operation.
    fn remove(&mut self) -> Result<(), SeqError> {
        Err(SeqError::unsupported_remove())
    }

    /// Adapts this cursor into a standard [`Iterator`].
    fn into_items(self) -> Items<Self>
    where
        Self: Sized,
    {
        Items::new(self)
    }

    /// Erases the concrete cursor type.
    fn boxed<'a>(self) -> Box<dyn Cursor<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<C> Cursor for &'_ mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        (**self).try_next()
    }

    fn remove(&mut self) -> Result<(), SeqError> {
        (**self).remove()
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        (**self).try_next()
    }

    fn remove(&mut self) -> Result<(), SeqError> {
        (**self).remove()
    }
}

impl<L, R> Cursor for Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn has_next(&mut self) -> bool {
        match self {
            Either::Left(l) => l.has_next(),
            Either::Right(r) => r.has_next(),
        }
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        match self {
            Either::Left(l) => l.try_next(),
            Either::Right(r) => r.try_next(),
        }
    }

    fn remove(&mut self) -> Result<(), SeqError> {
        match self {
            Either::Left(l) => l.remove(),
            Either::Right(r) => r.remove(),
        }
    }
}

/// Cursor over a standard [`Iterator`].
///
/// `has_next` pulls one element ahead and keeps it pending. Once the iterator
/// returns `None` the cursor is exhausted for good, even for iterators that are
/// not fused. Removal is not supported.
#[derive(Debug, Clone)]
pub struct IterCursor<I>
where
    I: Iterator,
{
    iter: I,
    state: Lookahead<I::Item>,
}

impl<I> IterCursor<I>
where
    I: Iterator,
{
    /// Wrap an iterator, or anything that converts into one.
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iter.into_iter(),
            state: Lookahead::Empty,
        }
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        let iter = &mut self.iter;
        self.state.fill_with(|| iter.next())
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        self.has_next();
        self.state.take().ok_or(SeqError::Exhausted)
    }
}

/// Standard [`Iterator`] view of a [`Cursor`].
///
/// Created by [`Cursor::into_items`]. Iteration stops at the first element the
/// cursor fails to produce.
#[derive(Debug, Clone)]
pub struct Items<C> {
    cursor: C,
}

impl<C> Items<C> {
    /// Wrap a cursor.
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Recover the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for Items<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.has_next() {
            self.cursor.try_next().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_cursor_has_next_does_not_consume() {
        let mut cursor = IterCursor::new(1..=2);
        for _ in 0..5 {
            assert!(cursor.has_next());
        }
        assert_eq!(cursor.try_next(), Ok(1));
        assert_eq!(cursor.try_next(), Ok(2));
        assert!(!cursor.has_next());
        assert_eq!(cursor.try_next(), Err(SeqError::Exhausted));
    }

    #[test]
    fn test_iter_cursor_refuses_remove() {
        let mut cursor = IterCursor::new(0..3);
        cursor.try_next().unwrap();
        assert_eq!(cursor.remove(), Err(SeqError::unsupported_remove()));
    }

    #[test]
    fn test_items_adapter_collects() {
        let items: Vec<_> = IterCursor::new("abc".chars()).into_items().collect();
        assert_eq!(items, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_either_dispatches() {
        let mut left: Either<_, IterCursor<std::ops::Range<i32>>> =
            Either::Left(IterCursor::new(vec![9]));
        assert_eq!(left.try_next(), Ok(9));
        assert!(!left.has_next());

        let mut right: Either<IterCursor<std::vec::IntoIter<i32>>, _> =
            Either::Right(IterCursor::new(4..5));
        assert_eq!(right.try_next(), Ok(4));
    }

    #[test]
    fn test_boxed_and_mut_ref_forward() {
        fn pull<C: Cursor>(mut cursor: C) -> Result<C::Item, SeqError> {
            cursor.try_next()
        }

        let mut inner = IterCursor::new(0..2);
        assert_eq!(pull(&mut inner), Ok(0));
        let mut boxed = inner.boxed();
        assert_eq!(boxed.try_next(), Ok(1));
        assert_eq!(boxed.try_next(), Err(SeqError::Exhausted));
    }
}
