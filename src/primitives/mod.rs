//! Cursor transformers.
//!
//! Each primitive wraps one base [`Cursor`](crate::Cursor) and is itself a
//! cursor, so they nest freely. None of them reads further ahead than a single
//! element.

mod filter;
mod map;
mod sample;
mod skip;
mod take;
mod take_while;

pub use filter::{filter, Filter};
pub use map::{map, select, Map, Select};
pub use sample::{sample, Sample};
pub use skip::{skip, Skip};
pub use take::{take, Take};
pub use take_while::{take_while, TakeWhile};

#[cfg(test)]
pub(crate) mod testing {
    use crate::{Cursor, SeqError};

    /// Vector-backed cursor whose `remove` deletes the element produced last.
    pub(crate) struct VecCursor<T> {
        pub(crate) items: Vec<T>,
        pos: usize,
    }

    impl<T> VecCursor<T> {
        pub(crate) fn new(items: Vec<T>) -> Self {
            Self { items, pos: 0 }
        }
    }

    impl<T: Clone> Cursor for VecCursor<T> {
        type Item = T;

        fn has_next(&mut self) -> bool {
            self.pos < self.items.len()
        }

        fn try_next(&mut self) -> Result<T, SeqError> {
            let item = self.items.get(self.pos).cloned().ok_or(SeqError::Exhausted)?;
            self.pos += 1;
            Ok(item)
        }

        fn remove(&mut self) -> Result<(), SeqError> {
            if self.pos == 0 {
                return Err(SeqError::Exhausted);
            }
            self.pos -= 1;
            self.items.remove(self.pos);
            Ok(())
        }
    }
}
