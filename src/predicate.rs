//! Element tests used by filtering cursors.
//!
//! Plain closures returning `bool` are wrapped in [`Total`]; closures that can
//! fail return `Result<bool, E>` and are wrapped in [`Partial`]. Predicates take
//! `&self` so that a single instance can serve every traversal of a lazy chain.

use std::{convert::Infallible, fmt};

/// Test applied to each element.
pub trait Predicate<T: ?Sized> {
    /// Failure a test can report.
    type Error: fmt::Debug;

    /// Decide whether `item` is accepted.
    fn test(&self, item: &T) -> Result<bool, Self::Error>;
}

impl<T, P> Predicate<T> for &'_ P
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    type Error = P::Error;

    fn test(&self, item: &T) -> Result<bool, Self::Error> {
        (**self).test(item)
    }
}

/// Predicate that cannot fail.
#[derive(Clone, Copy)]
pub struct Total<F>(pub F);

impl<T, F> Predicate<T> for Total<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    type Error = Infallible;

    #[inline]
    fn test(&self, item: &T) -> Result<bool, Self::Error> {
        Ok((self.0)(item))
    }
}

/// Predicate that may fail for some elements.
#[derive(Clone, Copy)]
pub struct Partial<F>(pub F);

impl<T, E, F> Predicate<T> for Partial<F>
where
    T: ?Sized,
    E: fmt::Debug,
    F: Fn(&T) -> Result<bool, E>,
{
    type Error = E;

    #[inline]
    fn test(&self, item: &T) -> Result<bool, Self::Error> {
        (self.0)(item)
    }
}
