//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP client for the CT log
//! - DNS resolver
//! - TLS connector
//! - Logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod resolver;
mod tls;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;
pub use tls::init_tls_connector;

/// Initializes a semaphore for controlling concurrency.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent operations allowed (at least 1)
///
/// # Returns
///
/// An `Arc<Semaphore>` that can be shared across multiple tasks.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    // A semaphore without permits would never let a task through
    Arc::new(Semaphore::new(count.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_semaphore_zero_still_admits_one() {
        assert_eq!(init_semaphore(0).available_permits(), 1);
        assert_eq!(init_semaphore(8).available_permits(), 8);
    }
}
