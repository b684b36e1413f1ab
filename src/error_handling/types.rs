//! Error type definitions.
//!
//! This module defines the typed errors surfaced to callers and the
//! categories of expected lookup failures tracked during a run.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error building the TLS client configuration.
    #[error("TLS configuration error: {0}")]
    TlsConfigError(#[from] rustls::Error),
}

/// Service-level failure of a recon run.
///
/// Only raised for failures no component anticipated. The message is
/// deliberately opaque; the cause is logged where the error is created.
#[derive(Error, Debug)]
pub enum ReconError {
    /// A per-domain worker panicked or was cancelled.
    #[error("Internal Server Error")]
    WorkerFailed(#[source] tokio::task::JoinError),

    /// The per-domain worker pool was closed while tasks were queued.
    #[error("Internal Server Error")]
    PoolClosed,
}

/// Categories of expected, per-lookup failures.
///
/// Each of these is caught at the component boundary and degraded to an
/// empty value; the category is only used for counting and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Certificate-transparency query
    CtRequestError,
    CtStatusError,
    CtDecodeError,
    // DNS errors
    DnsHostLookupError,
    DnsMxLookupError,
    DnsTxtLookupError,
    // TLS errors
    TlsCertificateError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::CtRequestError => "CT log request error",
            ErrorType::CtStatusError => "CT log status error",
            ErrorType::CtDecodeError => "CT log decode error",
            ErrorType::DnsHostLookupError => "DNS host lookup error",
            ErrorType::DnsMxLookupError => "DNS MX lookup error",
            ErrorType::DnsTxtLookupError => "DNS TXT lookup error",
            ErrorType::TlsCertificateError => "TLS certificate error",
        }
    }
}
