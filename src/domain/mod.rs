//! Target domain validation.
//!
//! The recon engine takes the domain as given; this is the only place input
//! is checked. Validation is syntactic, nothing here touches the network.

use thiserror::Error;

use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};

/// Reasons a requested domain is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainValidationError {
    #[error("domain must not be empty")]
    Empty,

    #[error("domain exceeds {max} characters", max = MAX_DOMAIN_LENGTH)]
    TooLong,

    #[error("domain must not contain whitespace")]
    Whitespace,

    #[error("domain must be a bare name, not a URL")]
    NotBareName,

    #[error("domain must not start with a dot")]
    LeadingDot,

    #[error("domain contains an empty label")]
    EmptyLabel,

    #[error("label '{0}' exceeds {max} characters", max = MAX_LABEL_LENGTH)]
    LabelTooLong(String),

    #[error("label '{0}' contains invalid characters")]
    InvalidCharacter(String),
}

/// Validates a requested domain and returns its trimmed form.
///
/// A single trailing dot (absolute name) is accepted and stripped, so the
/// returned name matches the relative names found in CT logs.
///
/// # Errors
///
/// Returns a `DomainValidationError` describing the first rule violated.
pub fn validate_domain(input: &str) -> Result<String, DomainValidationError> {
    let domain = input.trim();

    if domain.is_empty() {
        return Err(DomainValidationError::Empty);
    }
    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(DomainValidationError::TooLong);
    }
    if domain.chars().any(char::is_whitespace) {
        return Err(DomainValidationError::Whitespace);
    }
    if domain.contains(['/', '?', '#', '@', ':']) {
        return Err(DomainValidationError::NotBareName);
    }
    if domain.starts_with('.') {
        return Err(DomainValidationError::LeadingDot);
    }

    let domain = domain.strip_suffix('.').unwrap_or(domain);
    for label in domain.split('.') {
        if label.is_empty() {
            return Err(DomainValidationError::EmptyLabel);
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(DomainValidationError::LabelTooLong(label.to_string()));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '*'))
        {
            return Err(DomainValidationError::InvalidCharacter(label.to_string()));
        }
    }

    Ok(domain.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain_basic() {
        assert_eq!(validate_domain("example.com").unwrap(), "example.com");
        assert_eq!(validate_domain("a.b.example.co.uk").unwrap(), "a.b.example.co.uk");
    }

    #[test]
    fn test_validate_domain_trims() {
        assert_eq!(validate_domain("  example.com\n").unwrap(), "example.com");
    }

    #[test]
    fn test_validate_domain_trailing_dot() {
        assert_eq!(validate_domain("example.com.").unwrap(), "example.com");
        assert_eq!(validate_domain(" localhost. ").unwrap(), "localhost");
        assert_eq!(
            validate_domain("example.com.."),
            Err(DomainValidationError::EmptyLabel)
        );
    }

    #[test]
    fn test_validate_domain_underscore_and_wildcard() {
        assert!(validate_domain("_dmarc.example.com").is_ok());
        assert!(validate_domain("*.example.com").is_ok());
        assert!(validate_domain("localhost").is_ok());
    }

    #[test]
    fn test_validate_domain_empty() {
        assert_eq!(validate_domain(""), Err(DomainValidationError::Empty));
        assert_eq!(validate_domain("   "), Err(DomainValidationError::Empty));
    }

    #[test]
    fn test_validate_domain_too_long() {
        let long = format!("{}.com", ["a"; 130].join("."));
        assert!(long.len() > MAX_DOMAIN_LENGTH);
        assert_eq!(validate_domain(&long), Err(DomainValidationError::TooLong));
    }

    #[test]
    fn test_validate_domain_rejects_urls() {
        assert_eq!(
            validate_domain("https://example.com"),
            Err(DomainValidationError::NotBareName)
        );
        assert_eq!(
            validate_domain("example.com/path"),
            Err(DomainValidationError::NotBareName)
        );
        assert_eq!(
            validate_domain("example.com:443"),
            Err(DomainValidationError::NotBareName)
        );
    }

    #[test]
    fn test_validate_domain_whitespace_inside() {
        assert_eq!(
            validate_domain("exa mple.com"),
            Err(DomainValidationError::Whitespace)
        );
    }

    #[test]
    fn test_validate_domain_dots() {
        assert_eq!(
            validate_domain(".example.com"),
            Err(DomainValidationError::LeadingDot)
        );
        assert_eq!(
            validate_domain("example..com"),
            Err(DomainValidationError::EmptyLabel)
        );
    }

    #[test]
    fn test_validate_domain_label_rules() {
        let label = "a".repeat(64);
        assert_eq!(
            validate_domain(&format!("{label}.com")),
            Err(DomainValidationError::LabelTooLong(label))
        );
        assert_eq!(
            validate_domain("exa!mple.com"),
            Err(DomainValidationError::InvalidCharacter("exa!mple".to_string()))
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            DomainValidationError::Empty.to_string(),
            "domain must not be empty"
        );
        assert!(DomainValidationError::TooLong.to_string().contains("253"));
    }
}
