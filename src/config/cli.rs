//! Command-line options.
//!
//! Every option can also be supplied through a `DOMAIN_RECON_*` environment
//! variable (a `.env` file is loaded by the binary before parsing).

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::config::constants::{
    default_user_agent, CT_TIMEOUT_SECS, DEFAULT_BIND_ADDR, DEFAULT_CT_RETRIES, DEFAULT_CT_URL,
    DEFAULT_MAX_CONCURRENCY, DNS_TIMEOUT_SECS, TLS_TIMEOUT_SECS,
};
use crate::config::types::{LogFormat, LogLevel, ReconConfig};

/// Command-line options and configuration.
///
/// # Examples
///
/// ```bash
/// # Serve the recon API
/// domain_recon serve --bind 0.0.0.0:8000
///
/// # One-shot recon printed as JSON
/// domain_recon scan example.com --max-concurrency 50
///
/// # Point the enumerator at a different CT mirror
/// DOMAIN_RECON_CT_URL=http://localhost:9000/ domain_recon scan example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_recon",
    version,
    about = "Passive reconnaissance on a domain: subdomains, hosts, certificates and email records."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info, env = "DOMAIN_RECON_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain, env = "DOMAIN_RECON_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Certificate-transparency search service base URL
    #[arg(long, global = true, default_value = DEFAULT_CT_URL, env = "DOMAIN_RECON_CT_URL")]
    pub ct_url: String,

    /// CT query timeout in seconds
    #[arg(long, global = true, default_value_t = CT_TIMEOUT_SECS, env = "DOMAIN_RECON_CT_TIMEOUT_SECS")]
    pub ct_timeout_secs: u64,

    /// Retries for transient CT failures (timeouts, 429, 5xx)
    #[arg(long, global = true, default_value_t = DEFAULT_CT_RETRIES, env = "DOMAIN_RECON_CT_RETRIES")]
    pub ct_retries: usize,

    /// DNS query timeout in seconds
    #[arg(long, global = true, default_value_t = DNS_TIMEOUT_SECS, env = "DOMAIN_RECON_DNS_TIMEOUT_SECS")]
    pub dns_timeout_secs: u64,

    /// TCP connect / TLS handshake timeout in seconds
    #[arg(long, global = true, default_value_t = TLS_TIMEOUT_SECS, env = "DOMAIN_RECON_TLS_TIMEOUT_SECS")]
    pub tls_timeout_secs: u64,

    /// Maximum number of domains probed concurrently
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CONCURRENCY, env = "DOMAIN_RECON_MAX_CONCURRENCY")]
    pub max_concurrency: usize,

    /// User-Agent sent to the CT service (defaults to domain_recon/<version>)
    #[arg(long, global = true, env = "DOMAIN_RECON_USER_AGENT")]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// What the binary should do.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the recon API over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_BIND_ADDR, env = "DOMAIN_RECON_BIND")]
        bind: SocketAddr,
    },
    /// Run a single recon and print the result as JSON
    Scan {
        /// Target domain (e.g. example.com)
        domain: String,
    },
}

impl Cli {
    /// Builds the library configuration from the parsed options.
    pub fn recon_config(&self) -> ReconConfig {
        ReconConfig {
            ct_url: self.ct_url.clone(),
            ct_timeout_secs: self.ct_timeout_secs,
            ct_retries: self.ct_retries,
            dns_timeout_secs: self.dns_timeout_secs,
            tls_timeout_secs: self.tls_timeout_secs,
            max_concurrency: self.max_concurrency.max(1),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(default_user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_with_defaults() {
        let cli = Cli::try_parse_from(["domain_recon", "scan", "example.com"]).unwrap();
        match &cli.command {
            Command::Scan { domain } => assert_eq!(domain, "example.com"),
            other => panic!("expected scan, got {:?}", other),
        }
        let config = cli.recon_config();
        assert_eq!(config.ct_url, DEFAULT_CT_URL);
        assert_eq!(config.ct_timeout_secs, 10);
        assert_eq!(config.dns_timeout_secs, 5);
        assert_eq!(config.tls_timeout_secs, 5);
    }

    #[test]
    fn test_parse_serve_bind() {
        let cli =
            Cli::try_parse_from(["domain_recon", "serve", "--bind", "0.0.0.0:9999"]).unwrap();
        match cli.command {
            Command::Serve { bind } => assert_eq!(bind.port(), 9999),
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "domain_recon",
            "scan",
            "example.com",
            "--max-concurrency",
            "0",
            "--ct-retries",
            "0",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert!(matches!(cli.log_format, LogFormat::Json));
        let config = cli.recon_config();
        // A zero-sized pool would never make progress
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.ct_retries, 0);
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["domain_recon"]).is_err());
    }

    #[test]
    fn test_invalid_bind_is_error() {
        assert!(Cli::try_parse_from(["domain_recon", "serve", "--bind", "not-an-addr"]).is_err());
    }
}
