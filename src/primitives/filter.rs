use crate::{
    cursor::Cursor, error::SeqError, fault::fail_closed, lookahead::Lookahead,
    predicate::Predicate,
};

/// Yields only the base elements the predicate accepts.
///
/// `has_next` scans the base for the next accepted element and holds it
/// pending; `try_next` hands that element out, after which the next query scans
/// again. A failing predicate closes the cursor (see
/// [`FaultPolicy::FailClosed`](crate::fault::FaultPolicy::FailClosed)).
///
/// Removal through a filtered view is refused, since it cannot tell which base
/// element the caller means.
pub struct Filter<C, P>
where
    C: Cursor,
{
    base: C,
    predicate: P,
    state: Lookahead<C::Item>,
}

/// Create a cursor yielding the elements of `base` accepted by `predicate`.
///
/// ```rust
/// use iterables::prelude::*;
/// use iterables::primitives::filter;
///
/// let evens = filter(IterCursor::new(1..=6), Total(|x: &i32| x % 2 == 0));
/// assert_eq!(evens.into_items().collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
pub fn filter<C, P>(base: C, predicate: P) -> Filter<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    Filter {
        base,
        predicate,
        state: Lookahead::Empty,
    }
}

fn scan<C, P>(base: &mut C, predicate: &P) -> Option<C::Item>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    while base.has_next() {
        let item = base.try_next().ok()?;
        if fail_closed(predicate.test(&item))? {
            return Some(item);
        }
    }
    None
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let Self {
            base,
            predicate,
            state,
        } = self;
        state.fill_with(|| scan(base, predicate))
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        self.has_next();
        self.state.take().ok_or(SeqError::Exhausted)
    }

    fn remove(&mut self) -> Result<(), SeqError> {
        Err(SeqError::unsupported_remove())
    }
}
