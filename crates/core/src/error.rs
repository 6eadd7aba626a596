//! Unified error types for issuedb.
//!
//! All store operations return errors from this single closed set. Errors are
//! surfaced synchronously to the immediate caller; nothing is retried and no
//! error escalates past the store boundary.

use crate::status::Status;
use thiserror::Error;

/// All issuedb errors.
///
/// This is the canonical error type for every store operation. A failed call
/// leaves store state unchanged: a failed scan never mutates the access
/// cache, and a rejected write never touches the stored record.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the underlying file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operation on a store whose file handle has been released
    #[error("store is closed")]
    StoreClosed,

    /// A scan exhausted the file without another record (or another match)
    #[error("end of data")]
    EndOfData,

    /// A write or point read targeted a record id outside the stored range
    #[error("invalid record id {id}: store holds {count} records")]
    InvalidRecordId {
        /// The offending id (or index) as supplied by the caller
        id: i64,
        /// Number of records currently in the store
        count: u64,
    },

    /// A write attempted to modify a change item in a terminal state
    #[error("change item {id} is {status} and can no longer be edited")]
    TerminalState {
        /// Id of the change item
        id: u32,
        /// The stored terminal status
        status: Status,
    },

    /// A `select` call with arguments outside the cached page
    #[error("invalid selection {index} for a page of {page_size}")]
    InvalidSelection {
        /// 1-based index requested by the caller
        index: usize,
        /// Page size the caller claimed was rendered
        page_size: usize,
    },

    /// A text field does not fit its fixed on-disk width
    #[error("field `{field}` exceeds {max} bytes")]
    FieldTooLong {
        /// Name of the offending field
        field: &'static str,
        /// Fixed width of the field in bytes
        max: usize,
    },

    /// The backing file is not a valid record file
    #[error("corrupt store: {0}")]
    Corrupt(String),
}

/// Result type for issuedb operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error marks scan exhaustion.
    ///
    /// Exhaustion is the expected way a scan loop terminates; callers
    /// typically `rewind` and continue rather than propagate it.
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Error::EndOfData)
    }

    /// Check if this error is the terminal-state write guard.
    pub fn is_terminal_state(&self) -> bool {
        matches!(self, Error::TerminalState { .. })
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Corrupt(_))
    }
}
