use crate::{cursor::Cursor, error::SeqError};

/// Discards a fixed number of leading base elements, then delegates.
///
/// The discard happens once, on the first `has_next` or `try_next`, and stops
/// early if the base runs out.
pub struct Skip<C> {
    base: C,
    pending: Option<usize>,
}

/// Create a cursor that drops the first `count` elements of `base`.
pub fn skip<C>(base: C, count: usize) -> Skip<C>
where
    C: Cursor,
{
    Skip {
        base,
        pending: Some(count),
    }
}

impl<C> Skip<C>
where
    C: Cursor,
{
    fn ensure_skipped(&mut self) {
        let Some(count) = self.pending.take() else {
            return;
        };
        let mut skipped = 0;
        while skipped < count && self.base.has_next() {
            if self.base.try_next().is_err() {
                break;
            }
            skipped += 1;
        }
        tracing::trace!(requested = count, skipped, "skip applied");
    }
}

impl<C> Cursor for Skip<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.ensure_skipped();
        self.base.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        self.ensure_skipped();
        self.base.try_next()
    }

    /// Delegates to the base once the skip happened; before that it does nothing.
    fn remove(&mut self) -> Result<(), SeqError> {
        if self.pending.is_some() {
            return Ok(());
        }
        self.base.remove()
    }
}
