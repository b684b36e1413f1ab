//! Recon orchestration.
//!
//! One run enumerates subdomains, then fans out over the working set
//! (`subdomains ++ [domain]`) with one task per name while the email records
//! of the base domain are inspected alongside. All state lives in the run;
//! nothing is shared between runs except the clients in [`ReconContext`].

mod context;
mod task;

use std::sync::Arc;
use std::time::Instant;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{error, info};
use tokio::task::JoinHandle;

use crate::dns::inspect_email_records;
use crate::error_handling::{ProcessingStats, ReconError};
use crate::initialization::init_semaphore;
use crate::models::{CertMap, HostMap, ReconResult};
use crate::subdomains::enumerate_subdomains;

pub use context::ReconContext;
use task::{probe_domain, DomainProbe};

/// Runs a full recon of `domain`.
///
/// Expected lookup failures never surface here: they leave empty values in
/// the result. Only a failed worker (panic or cancellation) or a closed
/// worker pool produce a [`ReconError`].
///
/// # Arguments
///
/// * `domain` - Already validated target domain
/// * `ctx` - Shared clients and configuration
///
/// # Returns
///
/// A `ReconResult` whose `hosts` and `certs` carry exactly one key per
/// distinct name of the working set.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use domain_recon::{run_recon, ReconConfig, ReconContext};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let ctx = Arc::new(ReconContext::new(ReconConfig::default())?);
/// let result = run_recon("example.com", &ctx).await?;
/// println!("{}", serde_json::to_string_pretty(&result)?);
/// # Ok(())
/// # }
/// ```
pub async fn run_recon(domain: &str, ctx: &Arc<ReconContext>) -> Result<ReconResult, ReconError> {
    let started = Instant::now();
    let stats = Arc::new(ProcessingStats::new());
    info!("Starting recon for {domain}");

    let subdomains = enumerate_subdomains(
        &ctx.client,
        &ctx.config.ct_url,
        domain,
        ctx.config.ct_retries,
        &stats,
    )
    .await;

    let names = working_set(&subdomains, domain);
    info!("Probing {} names for {domain}", names.len());

    let (probes, email_records) = tokio::join!(
        probe_working_set(names, ctx, &stats),
        inspect_email_records(domain, &ctx.resolver, ctx.config.dns_timeout(), &stats),
    );
    let (hosts, certs) = probes?;

    info!(
        "Recon for {domain} finished in {:.2}s: {} subdomains, {} hosts resolved, {} certificates, {} lookup failures",
        started.elapsed().as_secs_f64(),
        subdomains.len(),
        hosts.values().filter(|ips| !ips.is_empty()).count(),
        certs.values().flatten().filter(|cert| !cert.is_empty()).count(),
        stats.total_errors()
    );
    for line in stats.summary() {
        info!("  {line}");
    }

    Ok(ReconResult {
        subdomains,
        hosts,
        certs,
        email_records,
    })
}

/// The names probed in a run: every discovered subdomain, then the domain.
///
/// Not deduplicated; a name that appears twice is probed twice and written
/// to the same map key.
pub fn working_set(subdomains: &[String], domain: &str) -> Vec<String> {
    subdomains
        .iter()
        .cloned()
        .chain(std::iter::once(domain.to_string()))
        .collect()
}

async fn probe_working_set(
    names: Vec<String>,
    ctx: &Arc<ReconContext>,
    stats: &Arc<ProcessingStats>,
) -> Result<(HostMap, CertMap), ReconError> {
    let semaphore = init_semaphore(ctx.config.max_concurrency);
    let mut tasks: FuturesUnordered<JoinHandle<DomainProbe>> = FuturesUnordered::new();

    for name in names {
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                error!("Worker pool closed while queueing {name}");
                for task in tasks.iter() {
                    task.abort();
                }
                return Err(ReconError::PoolClosed);
            }
        };

        let ctx = Arc::clone(ctx);
        let stats = Arc::clone(stats);
        tasks.push(tokio::spawn(async move {
            let _permit = permit;
            probe_domain(name, &ctx, &stats).await
        }));
    }

    let mut hosts = HostMap::new();
    let mut certs = CertMap::new();

    while let Some(joined) = tasks.next().await {
        let probe = match joined {
            Ok(probe) => probe,
            Err(e) => {
                error!("Recon worker failed: {e}");
                for task in tasks.iter() {
                    task.abort();
                }
                return Err(ReconError::WorkerFailed(e));
            }
        };
        hosts.insert(probe.domain.clone(), probe.addresses);
        certs.insert(probe.domain, vec![probe.certificate]);
    }

    Ok((hosts, certs))
}
