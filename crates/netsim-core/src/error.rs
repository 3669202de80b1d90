//! Error types for netsim operations.
//!
//! Lookups against missing nodes or edges are not errors; they return empty
//! results. Only malformed input, invalid edges and storage failures surface
//! here.

use thiserror::Error;

/// Result type for netsim operations.
pub type Result<T> = std::result::Result<T, NetsimError>;

/// Errors that can occur during netsim operations.
#[derive(Error, Debug)]
pub enum NetsimError {
    /// Persisted topology text could not be parsed.
    #[error("Format error on line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// Underlying storage failure (read or write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Edge weights are path costs and must be at least 1.
    #[error("Invalid weight: {0} (must be >= 1)")]
    InvalidWeight(i64),

    /// Edges join two distinct nodes.
    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(String),

    /// Snapshot serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience constructors
impl NetsimError {
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        NetsimError::Format {
            line,
            reason: reason.into(),
        }
    }

    /// True for errors caused by malformed persisted input.
    pub fn is_format(&self) -> bool {
        matches!(self, NetsimError::Format { .. })
    }
}
