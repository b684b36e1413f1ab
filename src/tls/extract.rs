//! Certificate name extraction utilities.

use x509_parser::der_parser::oid::Oid;
use x509_parser::objects::{oid2sn, oid_registry};
use x509_parser::x509::X509Name;

use crate::models::AttributeGroup;

/// Converts an X.509 name (subject or issuer) into attribute groups.
///
/// Each relative distinguished name becomes one group and the order of
/// groups and of pairs inside a group is kept as encoded. Attribute types
/// are rendered as their short names (`commonName`, `countryName`, ...), or
/// as the dotted OID when the registry does not know them. Values that are
/// not strings are skipped.
pub(crate) fn name_to_attribute_groups(name: &X509Name<'_>) -> Vec<AttributeGroup> {
    name.iter()
        .map(|rdn| {
            rdn.iter()
                .filter_map(|atv| {
                    let key = attribute_name(atv.attr_type());
                    match atv.as_str() {
                        Ok(value) => Some((key, value.to_string())),
                        Err(e) => {
                            log::debug!("Skipping non-string certificate attribute {key}: {e}");
                            None
                        }
                    }
                })
                .collect::<AttributeGroup>()
        })
        .filter(|group| !group.is_empty())
        .collect()
}

/// Short name for an attribute type OID.
///
/// The EV jurisdiction attributes use the names OpenSSL prints; everything
/// else comes from the x509-parser registry, then the dotted OID.
fn attribute_name(oid: &Oid<'_>) -> String {
    let dotted = oid.to_id_string();
    let ev_name = match dotted.as_str() {
        "1.3.6.1.4.1.311.60.2.1.1" => Some("jurisdictionLocalityName"),
        "1.3.6.1.4.1.311.60.2.1.2" => Some("jurisdictionStateOrProvinceName"),
        "1.3.6.1.4.1.311.60.2.1.3" => Some("jurisdictionCountryName"),
        _ => None,
    };
    match ev_name {
        Some(name) => name.to_string(),
        None => oid2sn(oid, oid_registry())
            .map(str::to_string)
            .unwrap_or(dotted),
    }
}
