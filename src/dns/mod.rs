//! DNS resolution and email record inspection.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - IPv4 address resolution (A records) for every name of a working set
//! - Mail exchanger queries (MX records)
//! - Text record queries (TXT records) with SPF/DKIM/DMARC classification
//!
//! Lookups are never retried and every failure degrades to an empty value.

mod email;
mod records;
mod resolution;

// Re-export public API
pub use email::{build_email_records, classify_txt_records, inspect_email_records, TxtPolicies};
pub use records::{lookup_mx_records, lookup_txt_records};
pub use resolution::{resolve_host, resolve_hosts};
