//! Arithmetic progressions over arbitrary position types.
//!
//! A [`Progression`] walks a linear integer domain and converts every point
//! back into a typed position through a [`Resolver`]. The resolver decides what
//! a position and a step mean (plain integers, timestamps, ...); the progression
//! only does arithmetic.
//!
//! # Examples
//!
//! ```rust
//! use iterables::prelude::*;
//!
//! let ticks = progression(&0, 3, &5, Identity);
//! assert_eq!(ticks.into_items().collect::<Vec<_>>(), vec![0, 5, 10, 15]);
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{cursor::Cursor, error::SeqError, sequence::Sequence};

/// Pure conversions between a position type, its step type and a linear `i64`
/// domain.
///
/// All three functions must be total. How out-of-range linear values map back
/// to positions (saturating, wrapping, ...) is up to the implementation.
pub trait Resolver {
    /// Points of the progression.
    type Position;
    /// Distance between two consecutive points.
    type Delta;

    /// Map a position onto the linear domain.
    fn position_to_linear(&self, position: &Self::Position) -> i64;

    /// Map a step onto the linear domain.
    fn delta_to_linear(&self, delta: &Self::Delta) -> i64;

    /// Map a linear value back to a position.
    fn linear_to_position(&self, linear: i64) -> Self::Position;
}

impl<R> Resolver for &'_ R
where
    R: Resolver + ?Sized,
{
    type Position = R::Position;
    type Delta = R::Delta;

    fn position_to_linear(&self, position: &Self::Position) -> i64 {
        (**self).position_to_linear(position)
    }

    fn delta_to_linear(&self, delta: &Self::Delta) -> i64 {
        (**self).delta_to_linear(delta)
    }

    fn linear_to_position(&self, linear: i64) -> Self::Position {
        (**self).linear_to_position(linear)
    }
}

/// Resolver for plain `i64` positions and steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Resolver for Identity {
    type Position = i64;
    type Delta = i64;

    fn position_to_linear(&self, position: &i64) -> i64 {
        *position
    }

    fn delta_to_linear(&self, delta: &i64) -> i64 {
        *delta
    }

    fn linear_to_position(&self, linear: i64) -> i64 {
        linear
    }
}

/// Resolver for wall-clock positions stepped by durations, at millisecond
/// resolution.
///
/// Values beyond what `SystemTime` or `i64` milliseconds can hold saturate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpochMillis;

fn millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

impl Resolver for EpochMillis {
    type Position = SystemTime;
    type Delta = Duration;

    fn position_to_linear(&self, position: &SystemTime) -> i64 {
        match position.duration_since(UNIX_EPOCH) {
            Ok(after) => millis(after),
            Err(before) => millis(before.duration()).saturating_neg(),
        }
    }

    fn delta_to_linear(&self, delta: &Duration) -> i64 {
        millis(*delta)
    }

    fn linear_to_position(&self, linear: i64) -> SystemTime {
        let offset = Duration::from_millis(linear.unsigned_abs());
        let shifted = if linear >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        };
        shifted.unwrap_or(UNIX_EPOCH)
    }
}

/// Cursor over `start, start + step, ..., start + step * count`.
///
/// Arithmetic runs in `i128`, so the end point never overflows; values handed
/// to the resolver saturate at the `i64` bounds. A zero step collapses the
/// progression to its start alone. A negative step with a non-zero count
/// yields nothing.
#[derive(Debug, Clone)]
pub struct Progression<R> {
    resolver: R,
    start: i128,
    end: i128,
    step: i128,
    current: i128,
}

/// Create a progression of `count` steps of `step` from `start`.
///
/// The result has `count + 1` positions when the step is positive.
pub fn progression<R>(start: &R::Position, count: usize, step: &R::Delta, resolver: R) -> Progression<R>
where
    R: Resolver,
{
    let start_linear = i128::from(resolver.position_to_linear(start));
    let mut step_linear = i128::from(resolver.delta_to_linear(step));
    let end = start_linear + step_linear * count as i128;

    if step_linear <= 0 && end >= start_linear {
        // one shot
        step_linear = end - start_linear + 1;
    }

    tracing::trace!(start = %start_linear, end = %end, step = %step_linear, "progression created");

    Progression {
        resolver,
        start: start_linear,
        end,
        step: step_linear,
        current: start_linear,
    }
}

fn saturate(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

impl<R> Progression<R>
where
    R: Resolver,
{
    /// Positions left to produce.
    pub fn remaining(&self) -> usize {
        if self.current > self.end {
            return 0;
        }
        let left = (self.end - self.current) / self.step + 1;
        usize::try_from(left).unwrap_or(usize::MAX)
    }
}

impl<R> Cursor for Progression<R>
where
    R: Resolver,
{
    type Item = R::Position;

    fn has_next(&mut self) -> bool {
        self.current <= self.end
    }

    fn try_next(&mut self) -> Result<Self::Item, SeqError> {
        if self.current > self.end {
            return Err(SeqError::Exhausted);
        }
        let position = self.resolver.linear_to_position(saturate(self.current));
        self.current += self.step;
        Ok(position)
    }

    /// Steps the cursor back by one step, unless it is still at the start.
    fn remove(&mut self) -> Result<(), SeqError> {
        if self.current > self.start {
            self.current -= self.step;
        }
        Ok(())
    }
}

/// Restartable description of a progression.
#[derive(Debug, Clone)]
pub struct ProgressionSpec<R>
where
    R: Resolver,
{
    start: R::Position,
    count: usize,
    step: R::Delta,
    resolver: R,
}

impl<R> ProgressionSpec<R>
where
    R: Resolver,
{
    /// Describe `count` steps of `step` from `start`.
    pub fn new(start: R::Position, count: usize, step: R::Delta, resolver: R) -> Self {
        Self {
            start,
            count,
            step,
            resolver,
        }
    }
}

impl<R> Sequence for ProgressionSpec<R>
where
    R: Resolver,
{
    type Item = R::Position;
    type Cursor<'a> = Progression<&'a R> where Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        progression(&self.start, self.count, &self.step, &self.resolver)
    }
}
