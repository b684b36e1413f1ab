//! Configuration types.
//!
//! This module defines the enums and the library configuration struct. The
//! struct has no CLI dependency so the engine can be embedded directly.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    default_user_agent, CT_TIMEOUT_SECS, DEFAULT_CT_RETRIES, DEFAULT_CT_URL,
    DEFAULT_MAX_CONCURRENCY, DNS_TIMEOUT_SECS, TLS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration for a recon run.
///
/// # Examples
///
/// ```no_run
/// use domain_recon::ReconConfig;
///
/// let config = ReconConfig {
///     max_concurrency: 50,
///     ct_retries: 0,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ReconConfig {
    /// Base URL of the certificate-transparency search service
    pub ct_url: String,

    /// CT query timeout in seconds (per attempt)
    pub ct_timeout_secs: u64,

    /// Retries for retriable CT failures
    pub ct_retries: usize,

    /// DNS query timeout in seconds
    pub dns_timeout_secs: u64,

    /// TCP connect / TLS handshake timeout in seconds
    pub tls_timeout_secs: u64,

    /// Maximum number of domains probed concurrently
    pub max_concurrency: usize,

    /// User-Agent sent to the CT service
    pub user_agent: String,
}

impl ReconConfig {
    pub fn ct_timeout(&self) -> Duration {
        Duration::from_secs(self.ct_timeout_secs)
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }

    pub fn tls_timeout(&self) -> Duration {
        Duration::from_secs(self.tls_timeout_secs)
    }
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            ct_url: DEFAULT_CT_URL.to_string(),
            ct_timeout_secs: CT_TIMEOUT_SECS,
            ct_retries: DEFAULT_CT_RETRIES,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            tls_timeout_secs: TLS_TIMEOUT_SECS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_format_debug() {
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }

    #[test]
    fn test_recon_config_default() {
        let config = ReconConfig::default();
        assert_eq!(config.ct_url, "https://crt.sh/");
        assert_eq!(config.ct_timeout(), Duration::from_secs(10));
        assert_eq!(config.dns_timeout(), Duration::from_secs(5));
        assert_eq!(config.tls_timeout(), Duration::from_secs(5));
        assert_eq!(config.ct_retries, 2);
        assert_eq!(config.max_concurrency, 20);
        assert!(config.user_agent.starts_with("domain_recon/"));
    }
}
