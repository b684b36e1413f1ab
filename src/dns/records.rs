//! DNS record queries (MX, TXT).

use std::time::Duration;

use anyhow::{Error, Result};
use hickory_resolver::TokioAsyncResolver;

use super::resolution::is_no_records;

/// Queries MX (mail exchanger) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
/// * `timeout` - Upper bound for the query
///
/// # Returns
///
/// Exchange host names in the order the resolver returned them (duplicates
/// kept), or an empty vector when the domain has no MX records.
///
/// # Errors
///
/// Timeouts and resolver failures other than "no records".
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
) -> Result<Vec<String>, Error> {
    let lookup = tokio::time::timeout(timeout, resolver.mx_lookup(domain))
        .await
        .map_err(|_| anyhow::anyhow!("MX lookup timed out ({}s)", timeout.as_secs()))?;

    match lookup {
        Ok(lookup) => Ok(lookup.iter().map(|mx| mx.exchange().to_utf8()).collect()),
        Err(e) if is_no_records(&e) => {
            log::debug!("No MX records for {domain}: {e}");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Queries TXT records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
/// * `timeout` - Upper bound for the query
///
/// # Returns
///
/// One string per TXT record, in resolver order. Records split into several
/// character-strings are joined without a separator.
///
/// # Errors
///
/// Timeouts and resolver failures other than "no records".
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
) -> Result<Vec<String>, Error> {
    let lookup = tokio::time::timeout(timeout, resolver.txt_lookup(domain))
        .await
        .map_err(|_| anyhow::anyhow!("TXT lookup timed out ({}s)", timeout.as_secs()))?;

    match lookup {
        Ok(lookup) => Ok(lookup
            .iter()
            .map(|txt| {
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                    .collect::<Vec<String>>()
                    .join("")
            })
            .collect()),
        Err(e) if is_no_records(&e) => {
            log::debug!("No TXT records for {domain}: {e}");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}
