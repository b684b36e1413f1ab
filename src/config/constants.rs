//! Configuration constants.
//!
//! This module defines the defaults used throughout the application,
//! including timeouts, concurrency limits and the upstream CT endpoint.

/// Default certificate-transparency search service.
///
/// Queried as `GET <url>?q=%.<domain>&output=json`.
pub const DEFAULT_CT_URL: &str = "https://crt.sh/";

// Network operation timeouts
/// CT log query timeout in seconds (per attempt)
pub const CT_TIMEOUT_SECS: u64 = 10;
/// DNS query timeout in seconds (A, MX and TXT)
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// TCP connect timeout and TLS handshake timeout in seconds (each)
pub const TLS_TIMEOUT_SECS: u64 = 5;

/// Port probed for the peer certificate
pub const HTTPS_PORT: u16 = 443;

/// Maximum number of domains of one working set probed at the same time
pub const DEFAULT_MAX_CONCURRENCY: usize = 20;

// Retry strategy (CT query only; DNS and TLS lookups are never retried)
/// Initial delay in milliseconds before the first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 4;
/// Number of retries after the initial CT attempt
pub const DEFAULT_CT_RETRIES: usize = 2;

/// Address the HTTP boundary binds to unless overridden
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Maximum length of a DNS name in its textual form
pub const MAX_DOMAIN_LENGTH: usize = 253;
/// Maximum length of a single DNS label
pub const MAX_LABEL_LENGTH: usize = 63;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Default User-Agent string for the CT query.
pub fn default_user_agent() -> String {
    format!("domain_recon/{}", env!("CARGO_PKG_VERSION"))
}
