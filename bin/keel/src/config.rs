//! Endpoints and owner key read from the environment
use keel_primitives::{constants::env, validate_private_key};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more variables are unset or empty
    #[error("{} is not set", .0.join(" or "))]
    Missing(Vec<&'static str>),

    /// The private key is not 32 bytes of hex
    #[error("invalid PRIVATE_KEY: {0}")]
    InvalidPrivateKey(String),
}

/// Bundler and paymaster endpoints plus the key owning the account
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub bundler_rpc: String,
    pub paymaster_rpc: String,
    pub private_key: String,
}

impl Config {
    /// Reads every variable through `lookup`, empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = vec![];
        let mut read = |name: &'static str| match lookup(name).filter(|v| !v.trim().is_empty()) {
            Some(value) => value,
            None => {
                missing.push(name);
                String::new()
            }
        };

        let bundler_rpc = read(env::BUNDLER_RPC);
        let paymaster_rpc = read(env::PAYMASTER_RPC);
        let private_key = read(env::PRIVATE_KEY);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        validate_private_key(&private_key)
            .map_err(|err| ConfigError::InvalidPrivateKey(err.to_string()))?;

        Ok(Self { bundler_rpc, paymaster_rpc, private_key })
    }

    /// Reads the process environment, after loading `.env` if there is one
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bundler_rpc", &keel_rpc::redact_url(&self.bundler_rpc))
            .field("paymaster_rpc", &keel_rpc::redact_url(&self.paymaster_rpc))
            .field("private_key", &"<redacted>")
            .finish()
    }
}
