//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for A, MX and TXT lookups.
///
/// Uses the system resolver configuration when it can be read and falls back
/// to the library default (Google public DNS) otherwise. Each query gets a
/// single attempt bounded by `timeout`; lookups are not retried.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
pub fn init_resolver(timeout: Duration) -> Arc<TokioAsyncResolver> {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::debug!("Could not read system DNS configuration ({e}); using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = timeout;
    opts.attempts = 1;
    // Names are queried exactly as given; no search-domain appending
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}
