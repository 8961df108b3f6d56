//! Account abstraction (ERC-4337) primitive types
//!
//! This crate contains the v0.7 user operation, the chain descriptor and the signing wallet
//! used to drive a Kernel smart account.

pub mod call;
pub mod chain;
pub mod constants;
mod user_operation;
mod utils;
mod wallet;

pub use call::Call;
pub use chain::ChainSpec;
pub use user_operation::{
    PackedUserOperation, UserOperation, UserOperationGasEstimation, UserOperationHash,
    UserOperationReceipt,
};
pub use utils::{get_address, pack_uint128, unpack_uint128};
pub use wallet::{validate_private_key, Wallet, WalletError};
