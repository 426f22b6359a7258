//! Check outcome types.

use strum_macros::EnumIter;

use crate::config::{DKIM_VERSION_TAG, DMARC_VERSION_TAG, SPF_VERSION_TAG};

/// The three email-authentication records a domain is checked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RecordKind {
    /// `v=spf1` at the domain apex
    Spf,
    /// `v=DKIM1` at `<selector>._domainkey.<domain>`
    Dkim,
    /// `v=DMARC1` at `_dmarc.<domain>`
    Dmarc,
}

impl RecordKind {
    /// Upper-case name used in result tags, e.g. `SPF`.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Spf => "SPF",
            RecordKind::Dkim => "DKIM",
            RecordKind::Dmarc => "DMARC",
        }
    }

    /// Version tag a record of this kind must start with.
    pub fn version_tag(self) -> &'static str {
        match self {
            RecordKind::Spf => SPF_VERSION_TAG,
            RecordKind::Dkim => DKIM_VERSION_TAG,
            RecordKind::Dmarc => DMARC_VERSION_TAG,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of a single check. Resolver errors are reported as `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// A record carrying the version tag was published
    Found,
    /// No matching record, or the lookup failed
    NotFound,
}

/// Extra lines shown in verbose mode, in the order they are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// Resolver error text for a lookup.
    LookupError(String),
    /// A TXT record returned for `name`.
    Record {
        /// Query name the record was returned for
        name: String,
        /// Record text, trimmed
        text: String,
    },
    /// Raw text of a matching record.
    Matched(String),
    /// Free-form remark, e.g. duplicate records.
    Note(String),
}

/// Result of one check for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Which record was checked
    pub kind: RecordKind,
    /// Found or not found
    pub status: CheckStatus,
    /// First matching record.
    pub record: Option<String>,
    /// DKIM only: the selector that matched.
    pub selector: Option<String>,
    /// Collected only when verbose.
    pub details: Vec<Detail>,
    /// Lookups that failed for reasons other than "no records".
    pub failed_lookups: usize,
}

impl CheckOutcome {
    /// A `Found` outcome for `record`, with no details yet.
    pub fn found(kind: RecordKind, record: String) -> Self {
        Self {
            kind,
            status: CheckStatus::Found,
            record: Some(record),
            selector: None,
            details: Vec::new(),
            failed_lookups: 0,
        }
    }

    /// A `NotFound` outcome with no details yet.
    pub fn not_found(kind: RecordKind) -> Self {
        Self {
            kind,
            status: CheckStatus::NotFound,
            record: None,
            selector: None,
            details: Vec::new(),
            failed_lookups: 0,
        }
    }

    /// True if the status is `Found`.
    pub fn is_found(&self) -> bool {
        self.status == CheckStatus::Found
    }
}
