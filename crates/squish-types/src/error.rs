//! Error types for the Squish engine.
//!
//! All crates return `SquishResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Squish engine.
#[derive(Debug, Error)]
pub enum SquishError {
    /// Configuration value is invalid (non-positive spacing, oversized grid, ...).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A simulation invariant was violated.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, SquishError>`.
pub type SquishResult<T> = Result<T, SquishError>;
