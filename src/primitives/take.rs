use crate::{cursor::Cursor, error::SeqError};

/// Delegates to the base but yields at most `limit` elements.
pub struct Take<C> {
    base: C,
    limit: usize,
    taken: usize,
}

/// Create a cursor yielding at most `count` elements of `base`.
pub fn take<C>(base: C, count: usize) -> Take<C>
where
    C: Cursor,
{
    Take {
        base,
        limit: count,
        taken: 0,
    }
}

impl<C> Take<C> {
    /// Elements still allowed through.
    pub fn remaining(&self) -> usize {
        self.limit - self.taken
    }
}

impl<C> Cursor for Take<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.taken < self.limit && self.base.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        if self.taken >= self.limit || !self.base.has_next() {
            return Err(SeqError::Exhausted);
        }
        let item = self.base.try_next()?;
        self.taken += 1;
        Ok(item)
    }

    /// Removes through the base and gives the slot back, so the limit can
    /// still be reached afterwards.
    fn remove(&mut self) -> Result<(), SeqError> {
        if self.taken == 0 {
            return Ok(());
        }
        self.base.remove()?;
        self.taken -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cursor::IterCursor, primitives::testing::VecCursor};

    #[test]
    fn test_take_caps_output() {
        let cursor = take(IterCursor::new(0..100), 3);
        assert_eq!(cursor.into_items().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_take_more_than_available() {
        let mut cursor = take(IterCursor::new(0..2), 5);
        assert_eq!(cursor.try_next(), Ok(0));
        assert_eq!(cursor.try_next(), Ok(1));
        assert!(!cursor.has_next());
        assert_eq!(cursor.try_next(), Err(SeqError::Exhausted));
    }

    #[test]
    fn test_take_zero() {
        let mut cursor = take(IterCursor::new(0..2), 0);
        assert!(!cursor.has_next());
        assert_eq!(cursor.try_next(), Err(SeqError::Exhausted));
    }

    #[test]
    fn test_beyond_cap_fails_even_if_base_has_more() {
        let mut cursor = take(IterCursor::new(0..10), 1);
        assert_eq!(cursor.try_next(), Ok(0));
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.try_next(), Err(SeqError::Exhausted));
    }

    #[test]
    fn test_remove_frees_a_slot() {
        let mut cursor = take(VecCursor::new(vec![1, 2, 3, 4]), 2);
        assert_eq!(cursor.try_next(), Ok(1));
        assert_eq!(cursor.try_next(), Ok(2));
        assert!(!cursor.has_next());

        assert_eq!(cursor.remove(), Ok(()));
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.try_next(), Ok(3));
        assert!(!cursor.has_next());
        assert_eq!(cursor.base.items, vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_before_any_take_is_noop() {
        let mut cursor = take(VecCursor::new(vec![1]), 1);
        assert_eq!(cursor.remove(), Ok(()));
        assert_eq!(cursor.base.items, vec![1]);
    }

    #[test]
    fn test_failed_base_remove_keeps_count() {
        let mut cursor = take(IterCursor::new(0..3), 2);
        cursor.try_next().unwrap();
        assert_eq!(cursor.remove(), Err(SeqError::unsupported_remove()));
        assert_eq!(cursor.remaining(), 1);
    }
}
