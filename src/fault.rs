//! How operators react when user code fails.
//!
//! Predicates, key functions and transformations may fail. Each operator
//! applies exactly one of three policies, and the helpers here are the only
//! place those policies are enforced:
//!
//! | Policy | Operators | Effect of a failure |
//! |--------|-----------|---------------------|
//! | [`FaultPolicy::FailClosed`] | filter, take-while | cursor ends, nothing surfaced |
//! | [`FaultPolicy::FailAbort`] | fallible group-by | whole call returns the error |
//! | [`FaultPolicy::FailLenient`] | select | that element becomes `None` |

use std::fmt;

/// Named failure-handling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultPolicy {
    /// Terminate the cursor as if the source had ended.
    FailClosed,
    /// Stop the operation and hand the failure to the caller.
    FailAbort,
    /// Replace the failed element with an absent value and keep going.
    FailLenient,
}

impl fmt::Display for FaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultPolicy::FailClosed => "fail-closed",
            FaultPolicy::FailAbort => "fail-abort",
            FaultPolicy::FailLenient => "fail-lenient",
        };
        f.write_str(name)
    }
}

/// Applies [`FaultPolicy::FailClosed`]: a failure becomes `None`, and the
/// caller must treat `None` as the end of its cursor.
pub fn fail_closed<T, E>(result: Result<T, E>) -> Option<T>
where
    E: fmt::Debug,
{
    result
        .map_err(|error| {
            tracing::debug!(policy = %FaultPolicy::FailClosed, ?error, "predicate failed; closing cursor");
        })
        .ok()
}

/// Applies [`FaultPolicy::FailAbort`]: the failure is passed through untouched.
pub fn fail_abort<T, E>(result: Result<T, E>) -> Result<T, E>
where
    E: fmt::Debug,
{
    result.map_err(|error| {
        tracing::debug!(policy = %FaultPolicy::FailAbort, ?error, "key function failed; aborting");
        error
    })
}

/// Applies [`FaultPolicy::FailLenient`]: a failure becomes an absent element.
pub fn fail_lenient<T, E>(result: Result<T, E>) -> Option<T>
where
    E: fmt::Debug,
{
    result
        .map_err(|error| {
            tracing::debug!(policy = %FaultPolicy::FailLenient, ?error, "transform failed; yielding absent element");
        })
        .ok()
}
