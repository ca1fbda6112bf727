//! Resolver construction bound to a single caller-chosen nameserver.

use std::net::{IpAddr, SocketAddr};

use hickory_resolver::{
    TokioResolver,
    config::{LookupIpStrategy, NameServerConfigGroup, ResolveHosts, ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
};

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};

/// Parse a resolver address into the socket the resolver will query.
///
/// Accepts `ip`, `[ipv6]`, `ip:port` and `[ipv6]:port`. An empty (or
/// whitespace-only) address selects `config.default_resolver`.
pub(crate) fn parse_resolver_address(
    address: &str,
    config: &ProbeConfig,
) -> ProbeResult<SocketAddr> {
    let address = address.trim();
    let address = if address.is_empty() {
        config.default_resolver.trim()
    } else {
        address
    };

    let bare = address
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(address);
    if let Ok(ip) = bare.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, config.dns_port));
    }

    address
        .parse::<SocketAddr>()
        .map_err(|_| ProbeError::InvalidResolver(format!("'{address}' is not an IP address")))
}

/// Build a resolver that only ever talks to `nameserver`.
///
/// System configuration, the hosts file and search domains are all left out,
/// so an answer always comes from the chosen server.
pub(crate) fn build_bound_resolver(nameserver: SocketAddr, config: &ProbeConfig) -> TokioResolver {
    let resolver_config = ResolverConfig::from_parts(
        None,
        vec![],
        NameServerConfigGroup::from_ips_clear(&[nameserver.ip()], nameserver.port(), true),
    );

    let mut opts = ResolverOpts::default();
    opts.timeout = config.dns_timeout();
    opts.attempts = config.dns_attempts();
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    opts.use_hosts_file = ResolveHosts::Never;

    TokioResolver::builder_with_config(resolver_config, TokioConnectionProvider::default())
        .with_options(opts)
        .build()
}
