//! Harness error taxonomy.
//!
//! The approximation engine reports domain problems through IEEE-754 special
//! values and never fails; every recoverable error in this workspace is a
//! harness concern (argument validation, report I/O, serialization).

use thiserror::Error;

/// Errors surfaced by the harness CLI and report writers.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The routines treat `n` as the number of series terms to spend; zero
    /// terms approximates nothing.
    #[error("iteration count must be greater than 0")]
    ZeroIterations,
    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
