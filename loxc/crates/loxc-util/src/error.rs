//! Core error types for loxc-util crate

use thiserror::Error;

/// Error type for source text lookups
#[derive(Debug, Error)]
pub enum SourceError {
    /// Invalid line number
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },

    /// Span does not fit inside the source
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        source_len: usize,
        span_start: usize,
        span_end: usize,
    },
}

/// Result type alias for source lookups
pub type SourceResult<T> = std::result::Result<T, SourceError>;
