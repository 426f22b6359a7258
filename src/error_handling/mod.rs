//! Error handling and scan statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, input and usage failures
//! - Scan statistics tracking (found / not found per record kind)
//!
//! Resolution failures are not errors of the run: they are folded into a
//! "record not found" outcome by the checkers and only counted here.

mod stats;
mod types;

// Re-export public API
pub use stats::ScanStats;
pub use types::{InitializationError, InputError, ScanError};
