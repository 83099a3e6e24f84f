//! Errors surfaced by cursors.

use thiserror::Error;

/// Errors a [`Cursor`](crate::Cursor) can report.
///
/// Predicate, key and transform failures are not listed here: each operator
/// handles them under its own [`FaultPolicy`](crate::fault::FaultPolicy).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqError {
    /// `try_next` was called with no element left to produce.
    #[error("sequence exhausted")]
    Exhausted,

    /// The cursor cannot perform the requested operation.
    #[error("`{operation}` is not supported by this cursor")]
    Unsupported {
        /// Name of the rejected operation
        operation: &'static str,
    },
}

impl SeqError {
    /// Shorthand for an unsupported `remove`.
    pub const fn unsupported_remove() -> Self {
        SeqError::Unsupported { operation: "remove" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(SeqError::Exhausted.to_string(), "sequence exhausted");
        assert_eq!(
            SeqError::unsupported_remove().to_string(),
            "`remove` is not supported by this cursor"
        );
    }
}
