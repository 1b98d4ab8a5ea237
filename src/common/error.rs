//! Error types for pagesim.

use thiserror::Error;

use crate::list::NodeId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Lookups of absent values and job aborts are not errors: the first is an
/// `Option`/`bool` result, the second is tallied in the statistics.
#[derive(Debug, Error)]
pub enum Error {
    /// An insert was attempted on a list that is already at capacity.
    ///
    /// This indicates a bug in the caller - the page manager always makes
    /// room before inserting.
    #[error("list is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A positional insert referenced a node that is no longer in the list.
    #[error("{0} is not a live node")]
    InvalidNode(NodeId),

    /// A job record could not be parsed into a `(job_id, page_id)` pair.
    #[error("malformed job record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// I/O error while reading job records.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CapacityExceeded { capacity: 4 };
        assert_eq!(format!("{}", err), "list is full (capacity 4)");

        let err = Error::MalformedRecord {
            line: 3,
            reason: "expected 2 fields, found 1".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "malformed job record on line 3: expected 2 fields, found 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = Error::from(io_err);
        assert!(err.source().is_some());
        assert!(Error::CapacityExceeded { capacity: 1 }.source().is_none());
    }
}
