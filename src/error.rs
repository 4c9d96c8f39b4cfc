//! Error types for Rollbook
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RollbookError
pub type Result<T> = std::result::Result<T, RollbookError>;

/// Unified error type for Rollbook operations
#[derive(Debug, Error)]
pub enum RollbookError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Allocation failure: {0}")]
    AllocationFailure(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Could not open file '{}': {source}", path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Line Decoding Errors
    // -------------------------------------------------------------------------
    #[error("Line {line} has incorrect format: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Line {line} has invalid date {day:02}.{month:02}.{year}")]
    InvalidDate {
        line: usize,
        day: i32,
        month: i32,
        year: i32,
    },

    #[error("Line {line} has invalid grade {grade} (must be 1-5)")]
    InvalidGrade { line: usize, grade: i32 },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
