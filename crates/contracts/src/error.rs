use ethers::{
    abi::AbiDecode,
    prelude::ContractError,
    providers::Middleware,
    types::Bytes,
};
use thiserror::Error;

/// Errors of read-only contract calls (entry point, Kernel factory)
#[derive(Debug, Error, Clone)]
pub enum ContractCallError {
    /// execution reverted
    #[error("execution reverted: {0}")]
    ExecutionReverted(String),

    /// Provider error
    #[error("provider error: {inner}")]
    Provider {
        /// The inner error message
        inner: String,
    },

    /// Data decoding error
    #[error("decode error: {inner}")]
    Decode {
        /// The inner error message
        inner: String,
    },
}

impl ContractCallError {
    pub fn from_contract_error<M: Middleware>(err: ContractError<M>) -> Self {
        match err {
            ContractError::DecodingError(e) => Self::Decode { inner: e.to_string() },
            ContractError::AbiError(e) => Self::Decode { inner: e.to_string() },
            ContractError::Revert(data) => decode_revert_error(data),
            ContractError::MiddlewareError { e } => Self::Provider { inner: e.to_string() },
            ContractError::ProviderError { e } => Self::Provider { inner: e.to_string() },
            other => Self::Provider { inner: other.to_string() },
        }
    }
}

// ethers-rs does not decode `revert("reason")` into a typed error, the payload starts with the
// `Error(string)` selector `0x08c379a0`
pub fn decode_revert_string(data: &Bytes) -> Option<String> {
    if data.len() < 4 {
        return None;
    }
    let (error_sig, reason) = data.split_at(4);
    if error_sig == [0x08, 0xc3, 0x79, 0xa0] {
        <String as AbiDecode>::decode(reason).ok()
    } else {
        None
    }
}

pub fn decode_revert_error(data: Bytes) -> ContractCallError {
    if let Some(reason) = decode_revert_string(&data) {
        return ContractCallError::ExecutionReverted(reason);
    }
    ContractCallError::ExecutionReverted(format!("{data}"))
}
