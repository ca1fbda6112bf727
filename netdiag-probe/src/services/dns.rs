//! DNS 查询模块
//!
//! Address and MX lookup for one hostname against one resolver.

use std::net::SocketAddr;
use std::time::Instant;

use hickory_resolver::{
    ResolveError, TokioResolver,
    proto::{ProtoError, ProtoErrorKind},
};
use log::debug;
use tokio::time::timeout;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::types::{DnsLookupResult, MxRecord};

use super::resolver::{build_bound_resolver, parse_resolver_address};

/// Resolve `hostname` against `resolver_address`.
///
/// Both the address lookup and the MX lookup must succeed; there is no
/// partial result. The whole operation is bounded by
/// [`ProbeConfig::overall_timeout`].
pub async fn lookup(
    config: &ProbeConfig,
    resolver_address: &str,
    hostname: &str,
) -> ProbeResult<DnsLookupResult> {
    if hostname.trim().is_empty() {
        return Err(ProbeError::LookupFailed(
            "Hostname is required".to_string(),
        ));
    }

    if is_localhost(hostname) {
        return Err(ProbeError::LookupFailed(format!(
            "{hostname} is answered locally and is never sent to a resolver"
        )));
    }

    let nameserver = parse_resolver_address(resolver_address, config)?;
    debug!("[DNS] Looking up {hostname} via {nameserver}");
    let start = Instant::now();

    let deadline = config.overall_timeout();
    let result = timeout(deadline, lookup_inner(config, nameserver, hostname))
        .await
        .map_err(|_| {
            ProbeError::ResolverUnavailable(format!(
                "{nameserver} did not answer within {}ms",
                deadline.as_millis()
            ))
        })??;

    debug!(
        "[DNS] Lookup completed: {hostname} via {nameserver} - addresses={}, mx={}, time={:?}",
        result.addresses.len(),
        result.mx_records.len(),
        start.elapsed()
    );

    Ok(result)
}

async fn lookup_inner(
    config: &ProbeConfig,
    nameserver: SocketAddr,
    hostname: &str,
) -> ProbeResult<DnsLookupResult> {
    // Dropped on every exit path, which closes its sockets.
    let resolver = build_bound_resolver(nameserver, config);

    let addresses = lookup_addresses(&resolver, hostname)
        .await
        .map_err(|e| map_resolve_error(&e, nameserver, hostname))?;
    let mx_records = lookup_mx(&resolver, hostname)
        .await
        .map_err(|e| map_resolve_error(&e, nameserver, hostname))?;

    Ok(DnsLookupResult {
        resolver: nameserver.to_string(),
        addresses,
        mx_records,
    })
}

async fn lookup_addresses(
    resolver: &TokioResolver,
    hostname: &str,
) -> Result<Vec<String>, ResolveError> {
    let response = resolver.lookup_ip(hostname).await?;
    Ok(response.iter().map(|ip| ip.to_string()).collect())
}

async fn lookup_mx(resolver: &TokioResolver, hostname: &str) -> Result<Vec<MxRecord>, ResolveError> {
    let response = resolver.mx_lookup(hostname).await?;
    Ok(response
        .iter()
        .map(|mx| MxRecord {
            priority: mx.preference(),
            exchange: mx.exchange().to_string().trim_end_matches('.').to_string(),
        })
        .collect())
}

/// `localhost` and its subdomains (RFC 6761).
///
/// hickory answers these itself without contacting the configured
/// nameserver, so they are rejected up front.
fn is_localhost(hostname: &str) -> bool {
    let name = hostname.trim().trim_end_matches('.').to_ascii_lowercase();
    name == "localhost" || name.ends_with(".localhost")
}

/// Classify a resolver error.
///
/// NXDOMAIN is checked first: it is an answer, not an outage.
fn map_resolve_error(err: &ResolveError, nameserver: SocketAddr, hostname: &str) -> ProbeError {
    if err.is_nx_domain() {
        return ProbeError::NameNotFound(format!("{hostname} does not exist (via {nameserver})"));
    }

    match err.proto().map(ProtoError::kind) {
        Some(ProtoErrorKind::Timeout | ProtoErrorKind::NoConnections | ProtoErrorKind::Io(_)) => {
            ProbeError::ResolverUnavailable(format!("{nameserver}: {err}"))
        }
        _ => ProbeError::LookupFailed(format!("{hostname}: {err}")),
    }
}
