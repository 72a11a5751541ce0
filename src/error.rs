//! Error types surfaced at the configuration and CLI boundary.
//!
//! The window engine itself never fails; these errors only arise while
//! turning host input into engine calls.

use thiserror::Error;

/// Errors surfaced while loading configuration or interpreting CLI input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlmanacError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A viewable row index could not be parsed.
    #[error("viewable index must be a non-negative integer: {value}")]
    InvalidViewableIndex {
        /// The offending list entry.
        value: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
