use crate::{cursor::Cursor, error::SeqError};

/// Yields every `factor`-th base element, starting with the first.
pub struct Sample<C> {
    base: C,
    factor: usize,
}

/// Create a cursor sampling every `factor`-th element of `base`.
///
/// A factor of zero is treated as one.
pub fn sample<C>(base: C, factor: usize) -> Sample<C>
where
    C: Cursor,
{
    Sample {
        base,
        factor: factor.max(1),
    }
}

impl<C> Sample<C> {
    /// Effective sampling factor after clamping.
    pub fn factor(&self) -> usize {
        self.factor
    }
}

impl<C> Cursor for Sample<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.base.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        let item = self.base.try_next()?;
        for _ in 1..self.factor {
            if !self.base.has_next() || self.base.try_next().is_err() {
                break;
            }
        }
        Ok(item)
    }

    fn remove(&mut self) -> Result<(), SeqError> {
        self.base.remove()
    }
}
