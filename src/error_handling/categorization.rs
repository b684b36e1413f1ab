//! Error categorization and retry strategy.

use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;

use super::types::ErrorType;

/// Gets the retry strategy for CT log queries.
///
/// # Arguments
///
/// * `retries` - Number of retries after the initial attempt
///
/// # Returns
///
/// A retry strategy iterator ready for use with `tokio_retry::Retry`.
pub fn get_retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(retries)
}

/// Categorizes a `reqwest::Error` raised while querying the CT log.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_status() {
        ErrorType::CtStatusError
    } else if error.is_decode() || error.is_body() {
        ErrorType::CtDecodeError
    } else {
        ErrorType::CtRequestError
    }
}

/// Determines if a CT query error is worth retrying.
///
/// Retriable:
/// - timeouts and connection failures
/// - 429 Too Many Requests
/// - 5xx server errors (crt.sh answers 502/503 under load)
///
/// Everything else (other 4xx, undecodable bodies, builder errors) fails
/// the same way on every attempt.
pub fn is_retriable_error(error: &reqwest::Error) -> bool {
    if let Some(status) = error.status() {
        let status_code = status.as_u16();
        if status_code == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS {
            return true;
        }
        return status.is_server_error();
    }

    if error.is_decode() || error.is_builder() || error.is_redirect() {
        return false;
    }

    error.is_timeout() || error.is_connect() || error.is_request() || error.is_body()
}
