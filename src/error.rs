//! Error types for the Engram HRR engine.

use thiserror::Error;

/// The main error type for Engram operations.
#[derive(Error, Debug)]
pub enum EngramError {
    /// A command was given the wrong number or shape of arguments.
    #[error("Usage error: {0}")]
    Usage(String),

    /// A referenced concept name is not present in the knowledge base.
    #[error("Concept not found: '{0}'")]
    UnknownConcept(String),

    /// Two vectors with different dimensions were combined.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The dimension the engine was constructed with.
        expected: usize,
        /// The dimension of the offending vector.
        actual: usize,
    },

    /// A vector with a numerically zero norm cannot be normalized.
    #[error("Degenerate vector: norm is numerically zero, cannot normalize")]
    DegenerateNorm,

    /// Empty input where at least one element is required.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Engram operations.
pub type Result<T> = std::result::Result<T, EngramError>;
