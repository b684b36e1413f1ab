//! Recon data model.
//!
//! Every value is built fresh for one run. Fields that a failed lookup could
//! leave unset are instead empty, so the serialized shape never changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One relative distinguished name: ordered `(attribute, value)` pairs.
///
/// Serialized as `[["commonName", "example.com"]]`.
pub type AttributeGroup = Vec<(String, String)>;

/// Domain name → resolved IP addresses (empty when queried but unresolvable).
pub type HostMap = BTreeMap<String, Vec<String>>;

/// Domain name → certificate entries (always exactly one entry per domain).
pub type CertMap = BTreeMap<String, Vec<CertificateInfo>>;

/// Subject and issuer of a peer certificate.
///
/// Both fields are always present; a failed probe leaves them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateInfo {
    pub subject: Vec<AttributeGroup>,
    pub issuer: Vec<AttributeGroup>,
}

impl CertificateInfo {
    /// True when neither subject nor issuer carries any attribute group.
    pub fn is_empty(&self) -> bool {
        self.subject.is_empty() && self.issuer.is_empty()
    }
}

/// Email-related DNS records of the target domain.
///
/// Always serialized with exactly the keys `mx`, `spf`, `dkim`, `dmarc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecords {
    /// Mail exchanger host names, in resolver order
    pub mx: Vec<String>,
    /// First TXT record mentioning "spf" (lower-cased), or empty
    pub spf: String,
    /// First TXT record mentioning "dkim" (lower-cased), or empty
    pub dkim: String,
    /// First TXT record mentioning "dmarc" (lower-cased), or empty
    pub dmarc: String,
}

/// Aggregate result of one recon run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconResult {
    /// Sorted, unique names discovered in the CT log
    pub subdomains: Vec<String>,
    pub hosts: HostMap,
    pub certs: CertMap,
    pub email_records: EmailRecords,
}

/// Request body accepted by the HTTP boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconRequest {
    pub domain: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_certificate_info_shape() {
        let value = serde_json::to_value(CertificateInfo::default()).unwrap();
        assert_eq!(value, json!({"subject": [], "issuer": []}));
    }

    #[test]
    fn test_certificate_info_pairs_serialize_as_arrays() {
        let info = CertificateInfo {
            subject: vec![vec![("commonName".to_string(), "example.com".to_string())]],
            issuer: vec![
                vec![("countryName".to_string(), "US".to_string())],
                vec![
                    ("organizationName".to_string(), "Example CA".to_string()),
                    ("organizationalUnitName".to_string(), "Issuing".to_string()),
                ],
            ],
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            json!({
                "subject": [[["commonName", "example.com"]]],
                "issuer": [
                    [["countryName", "US"]],
                    [["organizationName", "Example CA"], ["organizationalUnitName", "Issuing"]]
                ]
            })
        );
        assert!(!info.is_empty());
    }

    #[test]
    fn test_email_records_has_exactly_four_keys() {
        let value = serde_json::to_value(EmailRecords::default()).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["dkim", "dmarc", "mx", "spf"]);
        assert_eq!(value["mx"], json!([]));
        assert_eq!(value["spf"], json!(""));
    }

    #[test]
    fn test_recon_result_top_level_keys() {
        let value = serde_json::to_value(ReconResult::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["subdomains", "hosts", "certs", "email_records"] {
            assert!(object.contains_key(key), "Missing key: {key}");
        }
    }

    #[test]
    fn test_recon_request_deserialize() {
        let request: ReconRequest = serde_json::from_str(r#"{"domain": "example.com"}"#).unwrap();
        assert_eq!(request.domain, "example.com");
        assert!(serde_json::from_str::<ReconRequest>("{}").is_err());
    }
}
