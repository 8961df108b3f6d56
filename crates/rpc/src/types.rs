//! Request and response types of the ZeroDev `zd` namespace

use ethers::types::{Address, Bytes, U256};
use keel_primitives::UserOperation;
use serde::{Deserialize, Serialize};

/// Parameters of `zd_pm_accounts`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymasterAccountsRequest {
    pub chain_id: u64,
    pub entry_point_address: Address,
}

/// ERC-20 token the paymaster charges instead of native gas
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GasTokenData {
    pub token_address: Address,
}

/// Parameters of `zd_sponsorUserOperation`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorUserOperationRequest {
    pub chain_id: u64,
    pub user_op: UserOperation,
    pub entry_point_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_token_data: Option<GasTokenData>,
    pub should_override_fee: bool,
    pub should_consume: bool,
}

/// Result of `zd_sponsorUserOperation` for entry point v0.7
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SponsorUserOperationResult {
    pub paymaster: Address,
    pub paymaster_data: Bytes,
    pub paymaster_verification_gas_limit: U256,
    pub paymaster_post_op_gas_limit: U256,
    pub pre_verification_gas: U256,
    pub verification_gas_limit: U256,
    pub call_gas_limit: U256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
}

impl SponsorUserOperationResult {
    /// Copies the paymaster fields and gas limits onto the user operation
    pub fn apply(self, uo: UserOperation) -> UserOperation {
        UserOperation {
            paymaster: Some(self.paymaster),
            paymaster_data: Some(self.paymaster_data),
            paymaster_verification_gas_limit: Some(self.paymaster_verification_gas_limit),
            paymaster_post_op_gas_limit: Some(self.paymaster_post_op_gas_limit),
            pre_verification_gas: self.pre_verification_gas,
            verification_gas_limit: self.verification_gas_limit,
            call_gas_limit: self.call_gas_limit,
            max_fee_per_gas: self.max_fee_per_gas.unwrap_or(uo.max_fee_per_gas),
            max_priority_fee_per_gas: self
                .max_priority_fee_per_gas
                .unwrap_or(uo.max_priority_fee_per_gas),
            ..uo
        }
    }
}

/// EIP-1559 fees
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GasPrice {
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
}

/// Result of `zd_getUserOperationGasPrice`
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserOperationGasPrice {
    pub slow: GasPrice,
    pub standard: GasPrice,
    pub fast: GasPrice,
}
