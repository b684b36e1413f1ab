//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, upstream endpoints)
//! - The library-level `ReconConfig`
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command};
pub use constants::*;
pub use types::{LogFormat, LogLevel, ReconConfig};
