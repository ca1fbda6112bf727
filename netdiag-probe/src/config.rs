//! Probe configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Resolver used when the caller leaves the resolver address empty.
pub const DEFAULT_RESOLVER: &str = "8.8.8.8";

/// Standard DNS port.
pub const DEFAULT_DNS_PORT: u16 = 53;

const DNS_TIMEOUT_MS: u64 = 5_000;
const DNS_ATTEMPTS: usize = 2;
const HTTP_TIMEOUT_MS: u64 = 10_000;
const OVERALL_TIMEOUT_MS: u64 = 15_000;

/// Timeouts and defaults shared by both probes.
///
/// Deserializable so a host application can embed it in its own settings
/// file; missing fields fall back to [`ProbeConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProbeConfig {
    /// Resolver queried when the caller passes an empty address.
    pub default_resolver: String,
    /// Port used when a resolver address carries no port.
    pub dns_port: u16,
    /// Per-attempt DNS query timeout in milliseconds.
    pub dns_timeout_ms: u64,
    /// Number of attempts the resolver makes per query.
    pub dns_attempts: usize,
    /// HTTP request timeout (connect + response head) in milliseconds.
    pub http_timeout_ms: u64,
    /// Hard deadline for a whole probe in milliseconds.
    pub overall_timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            default_resolver: DEFAULT_RESOLVER.to_string(),
            dns_port: DEFAULT_DNS_PORT,
            dns_timeout_ms: DNS_TIMEOUT_MS,
            dns_attempts: DNS_ATTEMPTS,
            http_timeout_ms: HTTP_TIMEOUT_MS,
            overall_timeout_ms: OVERALL_TIMEOUT_MS,
        }
    }
}

// Zero values from a settings file are raised to the smallest usable value.
impl ProbeConfig {
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms.max(1))
    }

    pub fn dns_attempts(&self) -> usize {
        self.dns_attempts.max(1)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms.max(1))
    }

    pub fn overall_timeout(&self) -> Duration {
        Duration::from_millis(self.overall_timeout_ms.max(1))
    }
}
