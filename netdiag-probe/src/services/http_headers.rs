//! HTTP response header probe.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::time::Instant;

use log::debug;
use reqwest::header::HeaderMap;
use reqwest::{Client, redirect};
use tokio::time::timeout;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::types::HttpProbeResult;

/// GET `url` and return its status code and headers.
///
/// Only the response head is awaited; the body is never read. Redirects are
/// reported as-is rather than followed.
pub async fn fetch_headers(config: &ProbeConfig, url: &str) -> ProbeResult<HttpProbeResult> {
    let deadline = config.overall_timeout();
    timeout(deadline, fetch_headers_inner(config, url))
        .await
        .map_err(|_| {
            ProbeError::ConnectionFailed(format!(
                "{url} did not respond within {}ms",
                deadline.as_millis()
            ))
        })?
}

async fn fetch_headers_inner(config: &ProbeConfig, url: &str) -> ProbeResult<HttpProbeResult> {
    debug!("[HTTP] Fetching headers for {url}");
    let start = Instant::now();

    // Per-call client without an idle pool: the connection goes away with it.
    let client = build_client(config)?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ProbeError::ConnectionFailed(describe(&e)))?;

    let status_code = response.status().as_u16();
    let headers = collect_headers(response.headers());
    drop(response);

    debug!(
        "[HTTP] Fetch completed: {url} - status={status_code}, headers={}, time={:?}",
        headers.len(),
        start.elapsed()
    );

    Ok(HttpProbeResult {
        url: url.to_string(),
        status_code,
        headers,
    })
}

fn build_client(config: &ProbeConfig) -> ProbeResult<Client> {
    Client::builder()
        .timeout(config.http_timeout())
        .connect_timeout(config.http_timeout())
        .redirect(redirect::Policy::none())
        .no_proxy()
        .pool_max_idle_per_host(0)
        .build()
        .map_err(|e| ProbeError::ConnectionFailed(format!("Failed to build HTTP client: {e}")))
}

/// Group header values by lower-case name, keeping every value in arrival order.
fn collect_headers(map: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in map {
        headers
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    headers
}

/// Flatten an error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
