//! Stateless service façade exposing both probes.
//!
//! Every method on [`ProbeService`] is an async associated function; no instance is needed.

mod dns;
mod http_headers;
mod resolver;

use crate::config::ProbeConfig;
use crate::error::ProbeResult;
use crate::types::{DnsLookupResult, HttpProbeResult};

/// Entry point for the network probes.
///
/// ```rust,no_run
/// use netdiag_probe::ProbeService;
/// # async fn demo() -> netdiag_probe::ProbeResult<()> {
/// let dns = ProbeService::lookup("1.1.1.1", "example.com").await?;
/// let http = ProbeService::fetch_headers("https://example.com/").await?;
/// # Ok(())
/// # }
/// ```
pub struct ProbeService;

impl ProbeService {
    /// Resolve addresses and MX records for `hostname` using only
    /// `resolver_address`.
    ///
    /// An empty `resolver_address` selects the default resolver
    /// ([`DEFAULT_RESOLVER`](crate::DEFAULT_RESOLVER)).
    pub async fn lookup(resolver_address: &str, hostname: &str) -> ProbeResult<DnsLookupResult> {
        dns::lookup(&ProbeConfig::default(), resolver_address, hostname).await
    }

    /// [`lookup`](Self::lookup) with explicit timeouts and default resolver.
    pub async fn lookup_with_config(
        config: &ProbeConfig,
        resolver_address: &str,
        hostname: &str,
    ) -> ProbeResult<DnsLookupResult> {
        dns::lookup(config, resolver_address, hostname).await
    }

    /// GET `url` and report the status code and response headers.
    pub async fn fetch_headers(url: &str) -> ProbeResult<HttpProbeResult> {
        http_headers::fetch_headers(&ProbeConfig::default(), url).await
    }

    /// [`fetch_headers`](Self::fetch_headers) with explicit timeouts.
    pub async fn fetch_headers_with_config(
        config: &ProbeConfig,
        url: &str,
    ) -> ProbeResult<HttpProbeResult> {
        http_headers::fetch_headers(config, url).await
    }
}
