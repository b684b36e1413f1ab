//! HTTP client initialization.

use std::sync::Arc;

use crate::config::ReconConfig;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for the CT log query.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout of `ct_timeout_secs`
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &ReconConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.ct_timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
