use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Per-request timeout of the HTTP clients
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Builds a JSON-RPC client over HTTP for the bundler or the paymaster
pub fn build_http_client(url: &str) -> eyre::Result<HttpClient> {
    debug!("Connecting JSON-RPC client to {}", redact_url(url));
    Ok(HttpClientBuilder::default().request_timeout(REQUEST_TIMEOUT).build(url)?)
}

/// Strips the path and query of an endpoint, they often carry API keys
pub fn redact_url(url: &str) -> String {
    let (scheme, rest) = url.split_once("://").unwrap_or(("", url));
    let host = rest.split(['/', '?']).next().unwrap_or_default();
    if scheme.is_empty() {
        host.to_string()
    } else {
        format!("{scheme}://{host}")
    }
}
