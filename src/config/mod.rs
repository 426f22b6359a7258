//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (pool size, DNS timeouts, record tags)
//! - The scan mode selector
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{parse_scan_mode, Config, LogFormat, LogLevel, Opt, ScanMode};
