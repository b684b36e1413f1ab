//! Email-related DNS inspection (MX, SPF, DKIM, DMARC).

use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;
use log::{info, warn};

use crate::error_handling::{ErrorType, ProcessingStats};
use crate::models::EmailRecords;

use super::records::{lookup_mx_records, lookup_txt_records};

/// SPF/DKIM/DMARC values picked out of a domain's TXT records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TxtPolicies {
    pub spf: Option<String>,
    pub dkim: Option<String>,
    pub dmarc: Option<String>,
}

/// Strips surrounding quote characters and lower-cases a TXT record.
fn normalize_txt(record: &str) -> String {
    record.trim_matches('"').to_lowercase()
}

/// Classifies TXT records by substring.
///
/// Records are scanned in order; the first normalized record containing
/// `spf` becomes the SPF value, and likewise for `dkim` and `dmarc`. The
/// three checks are independent, so one record can fill several slots.
pub fn classify_txt_records(records: &[String]) -> TxtPolicies {
    records
        .iter()
        .map(|record| normalize_txt(record))
        .fold(TxtPolicies::default(), |mut policies, txt| {
            if policies.spf.is_none() && txt.contains("spf") {
                policies.spf = Some(txt.clone());
            }
            if policies.dmarc.is_none() && txt.contains("dmarc") {
                policies.dmarc = Some(txt.clone());
            }
            if policies.dkim.is_none() && txt.contains("dkim") {
                policies.dkim = Some(txt);
            }
            policies
        })
}

/// Builds the email record set from MX hosts and raw TXT records.
pub fn build_email_records(mx: Vec<String>, txt_records: &[String]) -> EmailRecords {
    let policies = classify_txt_records(txt_records);
    EmailRecords {
        mx,
        spf: policies.spf.unwrap_or_default(),
        dkim: policies.dkim.unwrap_or_default(),
        dmarc: policies.dmarc.unwrap_or_default(),
    }
}

/// Inspects the MX and TXT records of `domain`.
///
/// Both queries run concurrently. A failed query is logged, counted and
/// treated as "nothing found"; the result always carries all four fields.
pub async fn inspect_email_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
    stats: &ProcessingStats,
) -> EmailRecords {
    let (mx_result, txt_result) = tokio::join!(
        lookup_mx_records(domain, resolver, timeout),
        lookup_txt_records(domain, resolver, timeout)
    );

    let mx = mx_result.unwrap_or_else(|e| {
        warn!("MX record lookup failed for {domain}: {e}");
        stats.increment_error(ErrorType::DnsMxLookupError);
        Vec::new()
    });

    let txt_records = txt_result.unwrap_or_else(|e| {
        warn!("TXT record lookup failed for {domain}: {e}");
        stats.increment_error(ErrorType::DnsTxtLookupError);
        Vec::new()
    });

    let records = build_email_records(mx, &txt_records);
    info!(
        "Email records for {domain}: {} MX, spf={}, dkim={}, dmarc={}",
        records.mx.len(),
        !records.spf.is_empty(),
        !records.dkim.is_empty(),
        !records.dmarc.is_empty()
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txt(records: &[&str]) -> Vec<String> {
        records.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_classify_spf_and_dmarc() {
        let records = txt(&[
            "\"v=spf1 include:_spf.example.com ~all\"",
            "\"v=DMARC1; p=none\"",
        ]);
        let email = build_email_records(Vec::new(), &records);
        assert_eq!(email.spf, "v=spf1 include:_spf.example.com ~all");
        assert_eq!(email.dmarc, "v=dmarc1; p=none");
        assert_eq!(email.dkim, "");
        assert!(email.mx.is_empty());
    }

    #[test]
    fn test_classify_first_match_wins() {
        let records = txt(&["v=spf1 -all", "v=spf1 include:other ~all"]);
        let policies = classify_txt_records(&records);
        assert_eq!(policies.spf.as_deref(), Some("v=spf1 -all"));
    }

    #[test]
    fn test_classify_one_record_fills_several_slots() {
        let records = txt(&["SPF and DKIM notes"]);
        let policies = classify_txt_records(&records);
        assert_eq!(policies.spf.as_deref(), Some("spf and dkim notes"));
        assert_eq!(policies.dkim.as_deref(), Some("spf and dkim notes"));
        assert!(policies.dmarc.is_none());
    }

    #[test]
    fn test_classify_ignores_unrelated_records() {
        let records = txt(&["google-site-verification=abc", "MS=ms12345"]);
        assert_eq!(classify_txt_records(&records), TxtPolicies::default());
    }

    #[test]
    fn test_normalize_only_strips_quotes() {
        assert_eq!(normalize_txt("\"\"V=SPF1 \""), "v=spf1 ");
        assert_eq!(normalize_txt(" v=spf1 "), " v=spf1 ");
    }

    #[test]
    fn test_build_email_records_keeps_mx_order() {
        let mx = vec![
            "mx2.example.com.".to_string(),
            "mx1.example.com.".to_string(),
            "mx2.example.com.".to_string(),
        ];
        let email = build_email_records(mx.clone(), &[]);
        assert_eq!(email.mx, mx);
        assert_eq!(email.spf, "");
        assert_eq!(email.dkim, "");
        assert_eq!(email.dmarc, "");
    }
}
