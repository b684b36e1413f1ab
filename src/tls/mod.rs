//! TLS peer certificate probing.
//!
//! This module connects to a domain's HTTPS port and extracts the subject and
//! issuer of the certificate the server presents. Probing never fails from
//! the caller's point of view: any failure yields an empty `CertificateInfo`.
//!
//! Uses `tokio-rustls` for async TLS connections and `x509-parser` for certificate parsing.

mod extract;

use std::time::Duration;

use anyhow::Result;
use log::{debug, warn};
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use crate::config::HTTPS_PORT;
use crate::error_handling::{ErrorType, ProcessingStats};
use crate::models::CertificateInfo;

use extract::name_to_attribute_groups;

/// Retrieves the subject and issuer of `domain`'s certificate on port 443.
///
/// # Arguments
///
/// * `domain` - The domain name to connect to (also used for SNI and verification)
/// * `connector` - TLS connector validating against the web PKI roots
/// * `timeout` - Bound for the TCP connect and, separately, for the handshake
/// * `stats` - Per-run failure counters
///
/// # Returns
///
/// The certificate's subject and issuer, or both empty when the probe fails
/// (unresolvable name, refused connection, handshake or validation failure,
/// parse error, timeout). Failures are logged as warnings.
pub async fn probe_certificate(
    domain: &str,
    connector: &TlsConnector,
    timeout: Duration,
    stats: &ProcessingStats,
) -> CertificateInfo {
    probe_certificate_on(domain, HTTPS_PORT, connector, timeout, stats).await
}

/// Same as [`probe_certificate`] against an explicit port.
pub async fn probe_certificate_on(
    domain: &str,
    port: u16,
    connector: &TlsConnector,
    timeout: Duration,
    stats: &ProcessingStats,
) -> CertificateInfo {
    match fetch_certificate_info(domain, port, connector, timeout).await {
        Ok(info) => info,
        Err(e) => {
            warn!("TLS certificate retrieval failed for {domain}: {e}");
            stats.increment_error(ErrorType::TlsCertificateError);
            CertificateInfo::default()
        }
    }
}

async fn fetch_certificate_info(
    domain: &str,
    port: u16,
    connector: &TlsConnector,
    timeout: Duration,
) -> Result<CertificateInfo> {
    let server_name = ServerName::try_from(domain.to_string())
        .map_err(|e| anyhow::anyhow!("Invalid domain name {}: {}", domain, e))?;

    debug!("Connecting to {domain}:{port}");
    let sock = match tokio::time::timeout(timeout, TcpStream::connect((domain, port))).await {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => {
            return Err(anyhow::anyhow!(
                "Failed to connect to {}:{} - {}",
                domain,
                port,
                e
            ));
        }
        Err(_) => {
            return Err(anyhow::anyhow!(
                "TCP connection timeout for {}:{} ({}s)",
                domain,
                port,
                timeout.as_secs()
            ));
        }
    };

    let tls_stream = match tokio::time::timeout(timeout, connector.connect(server_name, sock)).await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            return Err(anyhow::anyhow!("TLS connection failed for {}: {}", domain, e));
        }
        Err(_) => {
            return Err(anyhow::anyhow!(
                "TLS handshake timeout for {} ({}s)",
                domain,
                timeout.as_secs()
            ));
        }
    };

    let (_, connection) = tls_stream.get_ref();
    let leaf = connection
        .peer_certificates()
        .and_then(|certs| certs.first())
        .ok_or_else(|| anyhow::anyhow!("No peer certificate presented by {}", domain))?;

    let (_, cert) = x509_parser::parse_x509_certificate(leaf.as_ref())
        .map_err(|e| anyhow::anyhow!("Certificate parse error for {}: {}", domain, e))?;

    let info = CertificateInfo {
        subject: name_to_attribute_groups(cert.subject()),
        issuer: name_to_attribute_groups(cert.issuer()),
    };
    debug!("Certificate for {domain}: subject={:?} issuer={:?}", info.subject, info.issuer);

    Ok(info)
}
