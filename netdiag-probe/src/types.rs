//! Public types returned by probe operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single mail-exchange record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MxRecord {
    /// Preference value (lower = preferred).
    pub priority: u16,
    /// Mail server host name, without the trailing root dot.
    pub exchange: String,
}

/// Result of a DNS probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsLookupResult {
    /// Resolver that answered, as `ip:port`.
    pub resolver: String,
    /// A and AAAA results in the order the resolver returned them.
    pub addresses: Vec<String>,
    /// MX records in the order the resolver returned them (not sorted by priority).
    pub mx_records: Vec<MxRecord>,
}

/// Result of an HTTPS header probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpProbeResult {
    /// URL that was requested.
    pub url: String,
    /// Response status code.
    pub status_code: u16,
    /// Lower-cased header name to every value received for it.
    ///
    /// A name may map to several values (e.g. `set-cookie`); callers must
    /// not assume a single value.
    pub headers: BTreeMap<String, Vec<String>>,
}

impl HttpProbeResult {
    /// All values for `name` (case-insensitive), or an empty slice.
    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
