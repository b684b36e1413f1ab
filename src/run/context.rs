//! Shared recon resources.

use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;
use tokio_rustls::TlsConnector;

use crate::config::ReconConfig;
use crate::error_handling::InitializationError;
use crate::initialization::{init_client, init_resolver, init_tls_connector};

/// Network clients and configuration shared by every recon run.
///
/// Holds no per-run state, so one context can serve any number of
/// concurrent runs. Wrap it in an `Arc` and clone the `Arc` into tasks.
pub struct ReconContext {
    /// Configuration the clients were built from
    pub config: ReconConfig,
    /// HTTP client for the CT log query
    pub client: Arc<reqwest::Client>,
    /// DNS resolver for A, MX and TXT lookups
    pub resolver: Arc<TokioAsyncResolver>,
    /// TLS connector validating against the web PKI roots
    pub tls: TlsConnector,
}

impl ReconContext {
    /// Builds every client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client or the TLS
    /// configuration cannot be built.
    pub fn new(config: ReconConfig) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        let resolver = init_resolver(config.dns_timeout());
        let tls = init_tls_connector()?;

        Ok(Self {
            config,
            client,
            resolver,
            tls,
        })
    }
}

impl std::fmt::Debug for ReconContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReconContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
