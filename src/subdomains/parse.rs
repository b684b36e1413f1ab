//! CT log response parsing.

use std::collections::BTreeSet;

use serde::Deserialize;

/// One record of the CT search service's JSON output.
///
/// Only `name_value` is used: the certificate's names, newline-separated.
/// Every other field the service returns is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CtLogEntry {
    #[serde(default)]
    pub name_value: Option<String>,
}

/// Extracts the sorted, unique names mentioning `domain` from CT records.
///
/// A line is kept when it contains `domain` anywhere, not only as a suffix,
/// so `example.com.evil.net` is kept for `example.com`. Kept lines are
/// trimmed; wildcard names are returned as logged.
pub fn extract_subdomains(entries: &[CtLogEntry], domain: &str) -> Vec<String> {
    let names: BTreeSet<String> = entries
        .iter()
        .filter_map(|entry| entry.name_value.as_deref())
        .flat_map(|name_value| name_value.split('\n'))
        .filter(|line| line.contains(domain))
        .map(|line| line.trim().to_string())
        .collect();

    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name_value: &str) -> CtLogEntry {
        CtLogEntry {
            name_value: Some(name_value.to_string()),
        }
    }

    #[test]
    fn test_extract_subdomains_dedups_and_sorts() {
        let entries = vec![entry("b.example.com\na.example.com"), entry("a.example.com")];
        assert_eq!(
            extract_subdomains(&entries, "example.com"),
            vec!["a.example.com", "b.example.com"]
        );
    }

    #[test]
    fn test_extract_subdomains_drops_unrelated_names() {
        let entries = vec![entry("www.example.com\nwww.example.org\ncdn.other.net")];
        assert_eq!(
            extract_subdomains(&entries, "example.com"),
            vec!["www.example.com"]
        );
    }

    #[test]
    fn test_extract_subdomains_substring_match_is_lax() {
        let entries = vec![entry("notexample.com.attacker.net")];
        assert_eq!(
            extract_subdomains(&entries, "example.com"),
            vec!["notexample.com.attacker.net"]
        );
    }

    #[test]
    fn test_extract_subdomains_trims_lines() {
        let entries = vec![entry("  api.example.com \r\n*.example.com")];
        assert_eq!(
            extract_subdomains(&entries, "example.com"),
            vec!["*.example.com", "api.example.com"]
        );
    }

    #[test]
    fn test_extract_subdomains_missing_name_value() {
        let entries = vec![CtLogEntry::default(), entry("")];
        assert!(extract_subdomains(&entries, "example.com").is_empty());
    }

    #[test]
    fn test_entries_deserialize_with_extra_fields() {
        let body = r#"[
            {"issuer_ca_id": 1, "name_value": "a.example.com", "id": 42},
            {"id": 43}
        ]"#;
        let entries: Vec<CtLogEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name_value.as_deref(), Some("a.example.com"));
        assert!(entries[1].name_value.is_none());
    }
}
