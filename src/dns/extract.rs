//! Query-name construction and record tag matching.

use crate::config::{DKIM_LABEL, DMARC_LABEL};

/// Returns true if `record`, once trimmed, starts with `tag` (ASCII case-insensitive).
///
/// This is the only validation the checkers perform on record content.
pub fn has_version_tag(record: &str, tag: &str) -> bool {
    record
        .trim()
        .get(..tag.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(tag))
}

/// `_dmarc.<domain>`
pub fn dmarc_name(domain: &str) -> String {
    format!("{DMARC_LABEL}.{domain}")
}

/// `<selector>._domainkey.<domain>`
pub fn dkim_name(selector: &str, domain: &str) -> String {
    format!("{selector}.{DKIM_LABEL}.{domain}")
}
