//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Typed errors for initialization and for the service-level failure
//! - Categories of expected lookup failures and their per-run counters
//! - CT query error categorization and retry strategy
//!
//! Expected failures (timeouts, NXDOMAIN, refused connections, bad upstream
//! bodies) never leave their component; they are counted here and degraded
//! to empty values. Only `ReconError` reaches the caller.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy, is_retriable_error};
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, ReconError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_errors(), 0);
        assert!(stats.summary().is_empty());
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::TlsCertificateError);
        stats.increment_error(ErrorType::TlsCertificateError);
        stats.increment_error(ErrorType::DnsMxLookupError);

        assert_eq!(stats.get_error_count(ErrorType::TlsCertificateError), 2);
        assert_eq!(stats.get_error_count(ErrorType::DnsMxLookupError), 1);
        assert_eq!(stats.total_errors(), 3);
        assert_eq!(
            stats.summary(),
            vec![
                "DNS MX lookup error: 1".to_string(),
                "TLS certificate error: 2".to_string()
            ]
        );
    }

    #[test]
    fn test_processing_stats_shared_across_tasks() {
        let stats = std::sync::Arc::new(ProcessingStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = std::sync::Arc::clone(&stats);
                std::thread::spawn(move || stats.increment_error(ErrorType::DnsHostLookupError))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_error_count(ErrorType::DnsHostLookupError), 8);
    }
}
