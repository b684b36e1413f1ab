//! domain_recon library: passive reconnaissance on a domain
//!
//! Given a domain, a recon run collects:
//! - subdomains recorded in certificate-transparency logs
//! - the IPv4 address of every discovered name and of the domain itself
//! - the subject and issuer of the certificate each of those names serves
//! - the domain's MX records and its SPF, DKIM and DMARC TXT policies
//!
//! Individual lookup failures never fail a run; they leave empty values in
//! the result.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use domain_recon::{run_recon, ReconConfig, ReconContext};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReconConfig {
//!     max_concurrency: 50,
//!     ..Default::default()
//! };
//! let ctx = Arc::new(ReconContext::new(config)?);
//!
//! let result = run_recon("example.com", &ctx).await?;
//! println!("{} subdomains, MX: {:?}", result.subdomains.len(), result.email_records.mx);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod dns;
mod domain;
mod error_handling;
pub mod initialization;
mod models;
mod run;
mod server;
pub mod subdomains;
pub mod tls;

// Re-export public API
pub use config::{LogFormat, LogLevel, ReconConfig};
pub use domain::{validate_domain, DomainValidationError};
pub use error_handling::{ErrorType, InitializationError, ProcessingStats, ReconError};
pub use models::{
    AttributeGroup, CertMap, CertificateInfo, EmailRecords, HostMap, ReconRequest, ReconResult,
};
pub use run::{run_recon, working_set, ReconContext};
pub use server::{router, serve_with_shutdown, shutdown_signal, start_server};
