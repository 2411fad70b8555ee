//! Demo CLI and conformance tooling for the itermath approximation engine.
//!
//! The engine itself never performs I/O; this crate owns everything around
//! it:
//! - argument validation and comparison output for the `log`/`pow` commands
//! - `%.12g`-style significant-digit rendering
//! - the built-in conformance suite against the host `f64::ln`/`f64::powf`
//! - structured JSONL run logs

#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod report;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use verify::{VerificationCase, VerificationResult, VerificationSummary};
