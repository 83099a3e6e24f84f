//! Single-slot lookahead buffer shared by every cursor that must read ahead.
//!
//! Answering "is there more?" sometimes requires pulling an element out of the
//! base. [`Lookahead`] keeps that element until the caller claims it, and
//! records when the base has nothing left so the question is never asked twice.

/// Tagged state of a lookahead slot.
///
/// A value moves `Empty -> Pending -> Empty` once per element, and the slot
/// ends in `Exhausted` once the producer runs dry or the owning cursor
/// terminates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lookahead<T> {
    /// Nothing buffered; the next query has to consult the producer.
    #[default]
    Empty,
    /// A produced element not yet handed to the caller.
    Pending(T),
    /// Terminal. No further element will ever be buffered.
    Exhausted,
}

impl<T> Lookahead<T> {
    /// Returns `true` when a value is waiting to be claimed.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Lookahead::Pending(_))
    }

    /// Returns `true` once the slot reached its terminal state.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Lookahead::Exhausted)
    }

    /// Claims the pending value, leaving the slot `Empty`.
    ///
    /// An `Empty` or `Exhausted` slot is left as it was and yields `None`.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, Lookahead::Empty) {
            Lookahead::Pending(value) => Some(value),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Fills an `Empty` slot from `produce`, returning whether a value is pending.
    ///
    /// `produce` only runs when the slot is `Empty`; a `None` from it moves the
    /// slot to `Exhausted` for good. Repeated calls are idempotent.
    pub fn fill_with<F>(&mut self, produce: F) -> bool
    where
        F: FnOnce() -> Option<T>,
    {
        if let Lookahead::Empty = self {
            *self = match produce() {
                Some(value) => Lookahead::Pending(value),
                None => Lookahead::Exhausted,
            };
        }
        self.is_pending()
    }

    /// Moves the slot into its terminal state, dropping any pending value.
    pub fn close(&mut self) {
        *self = Lookahead::Exhausted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_is_idempotent() {
        let mut calls = 0;
        let mut slot = Lookahead::Empty;

        assert!(slot.fill_with(|| {
            calls += 1;
            Some(7)
        }));
        assert!(slot.fill_with(|| {
            calls += 1;
            Some(8)
        }));
        assert_eq!(calls, 1);
        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot, Lookahead::Empty);
    }

    #[test]
    fn test_exhausted_is_terminal() {
        let mut slot: Lookahead<i32> = Lookahead::Empty;
        assert!(!slot.fill_with(|| None));
        assert!(slot.is_exhausted());
        assert!(!slot.fill_with(|| Some(1)));
        assert_eq!(slot.take(), None);
        assert!(slot.is_exhausted());
    }

    #[test]
    fn test_close_drops_pending() {
        let mut slot = Lookahead::Pending("x");
        slot.close();
        assert_eq!(slot.take(), None);
        assert!(slot.is_exhausted());
    }
}
