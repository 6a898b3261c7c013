//! Error types for lumen-harness operations.

use thiserror::Error;

/// Core error type for lumen-harness operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A buffer copy was attempted between buffers of different lengths.
    ///
    /// Buffer lengths are fixed at construction, so a mismatch is an
    /// invariant violation rather than a recoverable condition.
    #[error("buffer size mismatch: expected {expected} points, got {actual}")]
    BufferSizeMismatch {
        /// Length of the destination buffer.
        expected: usize,
        /// Length of the source buffer.
        actual: usize,
    },

    /// The engine reported an inconsistent state during a snapshot copy.
    #[error("engine error: {0}")]
    Engine(String),
}

/// Result type alias using the core [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
