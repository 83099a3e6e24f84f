//! Sources of cursors.
//!
//! A [`Sequence`] is anything that can hand out a [`Cursor`]. Most sequences
//! are restartable: every call to [`Sequence::cursor`] starts a fresh traversal.
//! [`SingleUse`] is the exception; all of its cursors share one underlying
//! iterator.
//!
//! # Examples
//!
//! ```rust
//! use iterables::prelude::*;
//!
//! let squares = from_fn(|| (1..=3).map(|x| x * x));
//! assert_eq!(squares.items().collect::<Vec<_>>(), vec![1, 4, 9]);
//! // restartable: a second traversal starts over
//! assert_eq!(squares.items().count(), 3);
//! ```

use std::{cell::RefCell, iter, marker::PhantomData, rc::Rc, slice};

use either::Either;

use crate::cursor::{Cursor, Items, IterCursor};

/// Something that can produce cursors over its elements.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Cursor produced per traversal; it may borrow from the sequence.
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Start a traversal.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Start a traversal viewed as a standard [`Iterator`].
    fn items(&self) -> Items<Self::Cursor<'_>> {
        self.cursor().into_items()
    }
}

impl<S> Sequence for &'_ S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Cursor<'a> = S::Cursor<'a> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<T> Sequence for [T]
where
    T: Clone,
{
    type Item = T;
    type Cursor<'a> = IterCursor<iter::Cloned<slice::Iter<'a, T>>> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter().cloned())
    }
}

impl<T, const N: usize> Sequence for [T; N]
where
    T: Clone,
{
    type Item = T;
    type Cursor<'a> = IterCursor<iter::Cloned<slice::Iter<'a, T>>> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter().cloned())
    }
}

impl<T> Sequence for Vec<T>
where
    T: Clone,
{
    type Item = T;
    type Cursor<'a> = IterCursor<iter::Cloned<slice::Iter<'a, T>>> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter().cloned())
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;
    type Cursor<'a> = Either<L::Cursor<'a>, R::Cursor<'a>> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        match self {
            Either::Left(l) => Either::Left(l.cursor()),
            Either::Right(r) => Either::Right(r.cursor()),
        }
    }
}

/// Restartable sequence backed by a closure that builds an iterator.
///
/// Created via [`from_fn`]. The closure runs once per traversal.
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Create a restartable sequence from a closure returning an iterable.
pub fn from_fn<F, I>(f: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn(f)
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a> = IterCursor<I::IntoIter> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new((self.0)())
    }
}

/// Sequence with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence that never yields.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor<'a> = IterCursor<iter::Empty<T>> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(iter::empty())
    }
}

/// Iterator handle shared between all cursors of a [`SingleUse`].
pub struct SharedIter<I>(Rc<RefCell<I>>);

impl<I> Iterator for SharedIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.borrow_mut().next()
    }
}

/// Sequence over one stateful iterator.
///
/// Every cursor pulls from the same iterator, so a second traversal resumes
/// where the previous one left off. An element a cursor has buffered through
/// `has_next` but never claimed is lost with that cursor.
pub struct SingleUse<I> {
    shared: Rc<RefCell<I>>,
}

/// Wrap a single stateful iterator as a (single-pass) sequence.
pub fn single_use<I>(iter: I) -> SingleUse<I::IntoIter>
where
    I: IntoIterator,
{
    SingleUse {
        shared: Rc::new(RefCell::new(iter.into_iter())),
    }
}

impl<I> Sequence for SingleUse<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type Cursor<'a> = IterCursor<SharedIter<I>> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(SharedIter(Rc::clone(&self.shared)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_slices_and_vecs_restart() {
        let v = vec![1, 2, 3];
        assert_eq!(v.items().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(v.items().collect::<Vec<_>>(), vec![1, 2, 3]);

        let s: &[i32] = &v[1..];
        assert_eq!(s.items().collect::<Vec<_>>(), vec![2, 3]);

        let a = ["x", "y"];
        assert_eq!(a.items().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_from_fn_runs_closure_per_traversal() {
        let calls = Cell::new(0);
        let seq = from_fn(|| {
            calls.set(calls.get() + 1);
            0..2
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(seq.items().count(), 2);
        assert_eq!(seq.items().count(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_empty_never_yields() {
        let seq = empty::<String>();
        let mut cursor = seq.cursor();
        assert!(!cursor.has_next());
        assert!(cursor.try_next().is_err());
    }

    #[test]
    fn test_single_use_resumes() {
        let seq = single_use(0..5);
        let first: Vec<_> = seq.items().take(2).collect();
        assert_eq!(first, vec![0, 1]);
        let rest: Vec<_> = seq.items().collect();
        assert_eq!(rest, vec![2, 3, 4]);
        assert_eq!(seq.items().count(), 0);
    }

    #[test]
    fn test_either_sequence() {
        let pick = |short: bool| -> Either<Vec<i32>, FromFn<fn() -> std::ops::Range<i32>>> {
            if short {
                Either::Left(vec![1])
            } else {
                Either::Right(from_fn((|| 0..3) as fn() -> std::ops::Range<i32>))
            }
        };
        assert_eq!(pick(true).items().count(), 1);
        assert_eq!(pick(false).items().count(), 3);
    }

    #[test]
    fn test_reference_is_a_sequence() {
        fn count<S: Sequence>(seq: S) -> usize {
            seq.items().count()
        }
        let v = vec!['a', 'b'];
        assert_eq!(count(&v), 2);
        assert_eq!(count(&v), 2);
    }
}
