use std::io;
use thiserror::Error;

use silica_core::SequenceError;

/// Error type for silica-io operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to serialize a record to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A binding site refers to a reference index with no name.
    #[error("Unknown reference index: {0}")]
    UnknownReference(usize),

    /// A subsequence was requested from a reference that is not loaded.
    #[error("Unknown reference: {0}")]
    UnknownReferenceName(String),

    /// A binding site refers to a primer index with no name or sequence.
    #[error("Unknown primer index: {0}")]
    UnknownPrimer(usize),

    /// A subsequence request does not fit inside its reference.
    #[error("Interval {start}-{end} is out of range for {reference} (length {length})")]
    OutOfRange {
        reference: String,
        start: u64,
        end: u64,
        length: usize,
    },

    /// A product or sequence failed validation.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Result type alias for silica-io operations.
pub type Result<T> = std::result::Result<T, ReportError>;
