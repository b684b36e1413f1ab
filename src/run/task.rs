//! Per-domain probe task.

use crate::dns::resolve_host;
use crate::error_handling::ProcessingStats;
use crate::models::CertificateInfo;
use crate::tls::probe_certificate;

use super::context::ReconContext;

/// What one worker learned about one name of the working set.
#[derive(Debug)]
pub(crate) struct DomainProbe {
    pub domain: String,
    pub addresses: Vec<String>,
    pub certificate: CertificateInfo,
}

/// Resolves `domain` and probes its certificate concurrently.
///
/// Both lookups degrade to empty values on failure, so this never fails.
pub(crate) async fn probe_domain(
    domain: String,
    ctx: &ReconContext,
    stats: &ProcessingStats,
) -> DomainProbe {
    let (addresses, certificate) = tokio::join!(
        resolve_host(&domain, &ctx.resolver, ctx.config.dns_timeout(), stats),
        probe_certificate(&domain, &ctx.tls, ctx.config.tls_timeout(), stats),
    );

    DomainProbe {
        domain,
        addresses,
        certificate,
    }
}
