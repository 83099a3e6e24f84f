//! Anonymous sequences produced by builder operators.
//!
//! Each one holds its upstream source plus the operator's configuration, and
//! builds a fresh primitive cursor on top of a fresh upstream cursor every
//! time it is traversed. Nothing is pulled at construction.

use std::fmt;

use crate::{
    predicate::Predicate,
    primitives::{
        filter, map, sample, select, skip, take, take_while, Filter, Map, Sample, Select, Skip,
        Take, TakeWhile,
    },
    sequence::Sequence,
};

/// Elements of `source` accepted by `predicate`.
#[derive(Clone)]
pub struct Filtered<S, P> {
    pub(crate) source: S,
    pub(crate) predicate: P,
}

impl<S, P> Sequence for Filtered<S, P>
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a> = Filter<S::Cursor<'a>, &'a P> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        filter(self.source.cursor(), &self.predicate)
    }
}

/// `source` without its first `count` elements.
#[derive(Clone)]
pub struct Skipped<S> {
    pub(crate) source: S,
    pub(crate) count: usize,
}

impl<S> Sequence for Skipped<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Cursor<'a> = Skip<S::Cursor<'a>> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        skip(self.source.cursor(), self.count)
    }
}

/// At most the first `count` elements of `source`.
#[derive(Clone)]
pub struct Taken<S> {
    pub(crate) source: S,
    pub(crate) count: usize,
}

impl<S> Sequence for Taken<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Cursor<'a> = Take<S::Cursor<'a>> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        take(self.source.cursor(), self.count)
    }
}

/// Leading run of `source` accepted by `predicate`.
#[derive(Clone)]
pub struct TakenWhile<S, P> {
    pub(crate) source: S,
    pub(crate) predicate: P,
}

impl<S, P> Sequence for TakenWhile<S, P>
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    type Item = S::Item;
    type Cursor<'a> = TakeWhile<S::Cursor<'a>, &'a P> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        take_while(self.source.cursor(), &self.predicate)
    }
}

/// Every `factor`-th element of `source`.
#[derive(Clone)]
pub struct Sampled<S> {
    pub(crate) source: S,
    pub(crate) factor: usize,
}

impl<S> Sequence for Sampled<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Cursor<'a> = Sample<S::Cursor<'a>> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        sample(self.source.cursor(), self.factor)
    }
}

/// Elements of `source` passed through `f`.
#[derive(Clone)]
pub struct Mapped<S, F> {
    pub(crate) source: S,
    pub(crate) f: F,
}

impl<S, F, U> Sequence for Mapped<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a> = Map<S::Cursor<'a>, &'a F> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        map(self.source.cursor(), &self.f)
    }
}

/// Elements of `source` passed through the fallible `f`, `None` where it fails.
#[derive(Clone)]
pub struct Selected<S, F> {
    pub(crate) source: S,
    pub(crate) f: F,
}

impl<S, F, U, E> Sequence for Selected<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> Result<U, E>,
    E: fmt::Debug,
{
    type Item = Option<U>;
    type Cursor<'a> = Select<S::Cursor<'a>, &'a F> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        select(self.source.cursor(), &self.f)
    }
}
