//! JSON-RPC interfaces of ERC-4337 bundlers (`eth` namespace) and ZeroDev bundlers and
//! paymasters (`zd` namespace)

mod client;
mod eth_api;
pub mod types;
mod zd_api;

pub use client::{build_http_client, redact_url, REQUEST_TIMEOUT};
pub use eth_api::{EthApiClient, EthApiServer};
pub use jsonrpsee::http_client::HttpClient;
pub use zd_api::{
    ZdBundlerApiClient, ZdBundlerApiServer, ZdPaymasterApiClient, ZdPaymasterApiServer,
};
