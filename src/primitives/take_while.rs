use crate::{
    cursor::Cursor, error::SeqError, fault::fail_closed, lookahead::Lookahead,
    predicate::Predicate,
};

/// Yields base elements until the first one the predicate rejects.
///
/// The first rejected element, the end of the base, or a failing predicate
/// ends the cursor permanently, even when later base elements would match.
pub struct TakeWhile<C, P>
where
    C: Cursor,
{
    base: C,
    predicate: P,
    state: Lookahead<C::Item>,
}

/// Create a cursor yielding the leading run of `base` accepted by `predicate`.
pub fn take_while<C, P>(base: C, predicate: P) -> TakeWhile<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    TakeWhile {
        base,
        predicate,
        state: Lookahead::Empty,
    }
}

impl<C, P> TakeWhile<C, P>
where
    C: Cursor,
{
    /// Returns `true` once the run has ended.
    pub fn is_ended(&self) -> bool {
        self.state.is_exhausted()
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
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
        state.fill_with(|| {
            if !base.has_next() {
                return None;
            }
            let item = base.try_next().ok()?;
            fail_closed(predicate.test(&item))?.then_some(item)
        })
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        self.has_next();
        self.state.take().ok_or(SeqError::Exhausted)
    }

    fn remove(&mut self) -> Result<(), SeqError> {
        Err(SeqError::unsupported_remove())
    }
}
