//! Subdomain discovery from certificate-transparency logs.
//!
//! Queries a crt.sh-compatible search service for every certificate matching
//! `%.<domain>` and collects the names those certificates were issued for.
//! Any failure degrades to an empty list.

mod parse;

use log::{debug, info, warn};
use tokio_retry::RetryIf;
use url::Url;

use crate::error_handling::{
    categorize_reqwest_error, get_retry_strategy, is_retriable_error, ErrorType, ProcessingStats,
};

pub use parse::{extract_subdomains, CtLogEntry};

/// Builds the CT search URL for `domain`: `<ct_url>?q=%.<domain>&output=json`.
pub fn ct_query_url(ct_url: &str, domain: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(ct_url)?;
    url.query_pairs_mut()
        .append_pair("q", &format!("%.{domain}"))
        .append_pair("output", "json");
    Ok(url)
}

/// Enumerates subdomains of `domain` from the CT log.
///
/// Retriable failures (timeouts, 429, 5xx) are retried up to `retries` times
/// with exponential backoff. Whatever still fails after that is logged,
/// counted in `stats` and returns an empty list.
///
/// # Arguments
///
/// * `client` - HTTP client (carries the per-attempt timeout)
/// * `ct_url` - Base URL of the CT search service
/// * `domain` - The base domain to search
/// * `retries` - Retries after the initial attempt
/// * `stats` - Per-run failure counters
///
/// # Returns
///
/// Sorted, unique names mentioning `domain`.
pub async fn enumerate_subdomains(
    client: &reqwest::Client,
    ct_url: &str,
    domain: &str,
    retries: usize,
    stats: &ProcessingStats,
) -> Vec<String> {
    let url = match ct_query_url(ct_url, domain) {
        Ok(url) => url,
        Err(e) => {
            warn!("Subdomain enumeration failed for {domain}: invalid CT URL {ct_url}: {e}");
            stats.increment_error(ErrorType::CtRequestError);
            return Vec::new();
        }
    };

    debug!("Querying CT log: {url}");

    let result = RetryIf::spawn(
        get_retry_strategy(retries),
        || fetch_entries(client, &url),
        |e: &reqwest::Error| {
            let retry = is_retriable_error(e);
            if retry {
                debug!("Retrying CT query for {domain} after: {e}");
            }
            retry
        },
    )
    .await;

    match result {
        Ok(entries) => {
            let subdomains = extract_subdomains(&entries, domain);
            info!(
                "CT log returned {} records, {} unique names for {domain}",
                entries.len(),
                subdomains.len()
            );
            subdomains
        }
        Err(e) => {
            warn!("Subdomain enumeration failed for {domain}: {e}");
            stats.increment_error(categorize_reqwest_error(&e));
            Vec::new()
        }
    }
}

async fn fetch_entries(client: &reqwest::Client, url: &Url) -> Result<Vec<CtLogEntry>, reqwest::Error> {
    client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<CtLogEntry>>()
        .await
}
