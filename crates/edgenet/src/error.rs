//! Error types for input validation.
//!
//! Only unrecoverable input problems are errors: shape mismatches and
//! malformed prior graphs, both rejected before any fitting starts.
//! Soft conditions (coordinate descent hitting its sweep budget, the
//! optimizer exhausting its evaluation budget) are reported as flags on
//! [`FitSummary`](crate::training::FitSummary) and
//! [`Optimum`](crate::optim::Optimum) instead of aborting.

use thiserror::Error;

/// Fatal input-validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EdgenetError {
    /// A matrix or vector has the wrong shape for the data it was paired with.
    #[error("dimension mismatch for {name}: expected {expected}, got {got}")]
    InvalidDimensions {
        /// Which input failed validation (e.g. "response matrix rows").
        name: &'static str,
        expected: usize,
        got: usize,
    },

    /// A prior graph is not a symmetric non-negative weighted adjacency matrix.
    #[error("invalid prior graph {name}: {reason}")]
    InvalidGraph {
        /// Which graph failed validation ("GX" or "GY").
        name: &'static str,
        reason: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EdgenetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_error_display() {
        let err = EdgenetError::InvalidDimensions {
            name: "response matrix rows",
            expected: 10,
            got: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("response matrix rows"));
        assert!(msg.contains("10"));
        assert!(msg.contains("7"));
    }

    #[test]
    fn graph_error_display() {
        let err = EdgenetError::InvalidGraph {
            name: "GX",
            reason: "negative edge weight",
        };
        assert!(err.to_string().contains("GX"));
    }
}
