use std::fmt;

use crate::{cursor::Cursor, error::SeqError, fault::fail_lenient};

/// Transforms every element produced by the base.
pub struct Map<C, F> {
    base: C,
    f: F,
}

/// Create a cursor applying `f` to each element of `base`.
pub fn map<C, F>(base: C, f: F) -> Map<C, F> {
    Map { base, f }
}

impl<C, F, U> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.base.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        self.base.try_next().map(&mut self.f)
    }

    fn remove(&mut self) -> Result<(), SeqError> {
        self.base.remove()
    }
}

/// Transforms every element with a fallible function, yielding `None` for the
/// elements it fails on.
///
/// Exhaustion of the base is still reported as [`SeqError::Exhausted`]; only
/// transform failures are absorbed (see
/// [`FaultPolicy::FailLenient`](crate::fault::FaultPolicy::FailLenient)).
pub struct Select<C, F> {
    base: C,
    f: F,
}

/// Create a cursor applying the fallible `f` to each element of `base`.
pub fn select<C, F>(base: C, f: F) -> Select<C, F> {
    Select { base, f }
}

impl<C, F, U, E> Cursor for Select<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> Result<U, E>,
    E: fmt::Debug,
{
    type Item = Option<U>;

    fn has_next(&mut self) -> bool {
        self.base.has_next()
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        let item = self.base.try_next()?;
        Ok(fail_lenient((self.f)(item)))
    }

    fn remove(&mut self) -> Result<(), SeqError> {
        self.base.remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cursor::IterCursor, primitives::testing::VecCursor};

    #[test]
    fn test_map_changes_type() {
        let cursor = map(IterCursor::new(1..=3), |x: i32| x.to_string());
        assert_eq!(cursor.into_items().collect::<Vec<_>>(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_map_forwards_remove() {
        let mut cursor = map(VecCursor::new(vec![1, 2]), |x: i32| x * 10);
        assert_eq!(cursor.try_next(), Ok(10));
        assert_eq!(cursor.remove(), Ok(()));
        assert_eq!(cursor.base.items, vec![2]);
    }

    #[test]
    fn test_select_absorbs_failures() {
        let cursor = select(IterCursor::new(vec!["1", "x", "3"]), |s: &str| s.parse::<i32>());
        assert_eq!(
            cursor.into_items().collect::<Vec<_>>(),
            vec![Some(1), None, Some(3)]
        );
    }

    #[test]
    fn test_select_still_reports_exhaustion() {
        let mut cursor = select(IterCursor::new(std::iter::empty::<&str>()), |s: &str| {
            s.parse::<u8>()
        });
        assert!(!cursor.has_next());
        assert_eq!(cursor.try_next(), Err(SeqError::Exhausted));
    }
}
