//! Calls executed by the smart account
use crate::utils::as_checksum_addr;
use ethers::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// A single call made by the account (target, value, calldata)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    #[serde(serialize_with = "as_checksum_addr")]
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

impl Call {
    pub fn new(to: Address, value: U256, data: Bytes) -> Self {
        Self { to, value, data }
    }

    /// Zero-value call without calldata
    pub fn empty(to: Address) -> Self {
        Self { to, ..Default::default() }
    }
}
