//! TLS connector initialization.

use std::sync::Arc;

use rustls::crypto::ring::default_provider;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::error_handling::InitializationError;

/// Builds the TLS connector used by the certificate prober.
///
/// Chains are validated against the Mozilla root store shipped in
/// `webpki-roots`. The crypto provider is passed explicitly so no global
/// provider has to be installed first.
///
/// # Errors
///
/// Returns `InitializationError::TlsConfigError` if the provider rejects the
/// default protocol versions.
pub fn init_tls_connector() -> Result<TlsConnector, InitializationError> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder_with_provider(Arc::new(default_provider()))
        .with_safe_default_protocol_versions()?
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(TlsConnector::from(Arc::new(config)))
}
