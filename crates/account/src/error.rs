use ethers::types::Address;
use keel_contracts::{ContractCallError, KernelEncodingError};
use keel_primitives::UserOperationHash;
use std::time::Duration;
use thiserror::Error;

/// Errors of the Kernel account and its client
#[derive(Debug, Error)]
pub enum AccountError {
    /// Read-only contract call failed (factory, entry point)
    #[error(transparent)]
    Contract(#[from] ContractCallError),

    /// Calls could not be encoded for the account
    #[error(transparent)]
    Encoding(#[from] KernelEncodingError),

    /// Node request failed
    #[error("provider error: {0}")]
    Provider(String),

    /// Bundler request failed or the bundler rejected the user operation
    #[error("bundler error: {0}")]
    Bundler(String),

    /// Paymaster request failed or sponsorship was denied
    #[error("paymaster error: {0}")]
    Paymaster(String),

    /// The paymaster has no contract for the chain and entry point
    #[error("paymaster has no account for entry point {entry_point:?} on chain {chain_id}")]
    NoPaymasterAccount { chain_id: u64, entry_point: Address },

    /// Signing the user operation failed
    #[error("signer error: {0}")]
    Signer(String),

    /// The user operation was not included within the wait bound
    #[error("timed out after {timeout:?} waiting for user operation {hash} receipt")]
    ReceiptTimeout { hash: UserOperationHash, timeout: Duration },
}

impl AccountError {
    pub(crate) fn bundler(err: impl std::fmt::Display) -> Self {
        Self::Bundler(err.to_string())
    }

    pub(crate) fn paymaster(err: impl std::fmt::Display) -> Self {
        Self::Paymaster(err.to_string())
    }

    pub(crate) fn provider(err: impl std::fmt::Display) -> Self {
        Self::Provider(err.to_string())
    }
}
