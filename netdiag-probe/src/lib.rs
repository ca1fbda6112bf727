//! Network probe layer for netdiag
//!
//! Two stateless probes: DNS address/MX lookup against a caller-chosen
//! resolver, and an HTTPS GET that reports the status code and headers.
//! Every call builds its own resolver or client and releases it before
//! returning; failures come back as [`ProbeError`] values.

mod config;
mod error;
mod services;
mod types;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test_utils;

pub use config::{DEFAULT_DNS_PORT, DEFAULT_RESOLVER, ProbeConfig};
pub use error::{ProbeError, ProbeErrorKind, ProbeResult};
pub use services::ProbeService;
pub use types::{DnsLookupResult, HttpProbeResult, MxRecord};
