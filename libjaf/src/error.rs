//! Error types for stream reindenting.

use thiserror::Error;

/// Result type for reindenting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Error type for reindenting into an output sink.
///
/// Scanning and offset tracking never fail on content; the only thing that
/// can go wrong is the sink itself.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The output sink rejected a write.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
