//! Host address resolution.
//!
//! This module resolves names to IPv4 addresses (A records). Every name is
//! resolved independently and a failure maps to an empty address list.

use std::time::Duration;

use futures::future::join_all;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::error_handling::{ErrorType, ProcessingStats};
use crate::models::HostMap;

/// Returns true for "this name has no such record" answers (NXDOMAIN / NODATA).
pub(crate) fn is_no_records(error: &ResolveError) -> bool {
    matches!(error.kind(), ResolveErrorKind::NoRecordsFound { .. })
}

/// Resolves a hostname to its IPv4 address.
///
/// # Arguments
///
/// * `host` - The hostname to resolve
/// * `resolver` - The DNS resolver instance
/// * `timeout` - Upper bound for the whole lookup
/// * `stats` - Per-run failure counters
///
/// # Returns
///
/// A single-element list with the first address returned, or an empty list
/// when the name does not resolve. Unknown names are expected and only
/// logged at debug; any other failure is logged as a warning and counted.
pub async fn resolve_host(
    host: &str,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
    stats: &ProcessingStats,
) -> Vec<String> {
    match tokio::time::timeout(timeout, resolver.ipv4_lookup(host)).await {
        Ok(Ok(lookup)) => {
            let addresses: Vec<String> = lookup.iter().take(1).map(|a| a.to_string()).collect();
            debug!("Resolved {host} to {addresses:?}");
            addresses
        }
        Ok(Err(e)) if is_no_records(&e) => {
            debug!("Host {host} does not resolve: {e}");
            Vec::new()
        }
        Ok(Err(e)) => {
            warn!("Host resolution error for {host}: {e}");
            stats.increment_error(ErrorType::DnsHostLookupError);
            Vec::new()
        }
        Err(_) => {
            warn!(
                "Host resolution timed out for {host} ({}s)",
                timeout.as_secs()
            );
            stats.increment_error(ErrorType::DnsHostLookupError);
            Vec::new()
        }
    }
}

/// Resolves every name in `names` concurrently.
///
/// Every input name becomes a key of the returned map, so "queried but not
/// resolvable" (empty list) is distinguishable from "not queried" (absent).
pub async fn resolve_hosts(
    names: &[String],
    resolver: &TokioAsyncResolver,
    timeout: Duration,
    stats: &ProcessingStats,
) -> HostMap {
    let lookups = names.iter().map(|name| async move {
        let addresses = resolve_host(name, resolver, timeout, stats).await;
        (name.clone(), addresses)
    });

    join_all(lookups).await.into_iter().collect()
}
