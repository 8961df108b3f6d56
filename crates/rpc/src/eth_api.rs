use ethers::types::{Address, U64};
use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use keel_primitives::{
    UserOperation, UserOperationGasEstimation, UserOperationHash, UserOperationReceipt,
};

/// The ERC-4337 `eth` namespace RPC methods served by bundlers
#[rpc(client, server, namespace = "eth")]
pub trait EthApi {
    /// Retrieve the current [EIP-155](https://eips.ethereum.org/EIPS/eip-155) chain ID.
    #[method(name = "chainId")]
    async fn chain_id(&self) -> RpcResult<U64>;

    /// Get the supported entry points for [UserOperations](UserOperation).
    #[method(name = "supportedEntryPoints")]
    async fn supported_entry_points(&self) -> RpcResult<Vec<Address>>;

    /// Send a [UserOperation](UserOperation).
    ///
    /// # Arguments
    /// * `user_operation: UserOperation` - The signed [UserOperation](UserOperation) to be sent.
    /// * `entry_point: Address` - The address of the entry point.
    ///
    /// # Returns
    /// * `RpcResult<UserOperationHash>` - The hash of the sent [UserOperation](UserOperation).
    #[method(name = "sendUserOperation")]
    async fn send_user_operation(
        &self,
        user_operation: UserOperation,
        entry_point: Address,
    ) -> RpcResult<UserOperationHash>;

    /// Estimate the gas limits of a [UserOperation](UserOperation) carrying a dummy signature.
    #[method(name = "estimateUserOperationGas")]
    async fn estimate_user_operation_gas(
        &self,
        user_operation: UserOperation,
        entry_point: Address,
    ) -> RpcResult<UserOperationGasEstimation>;

    /// Retrieve the receipt of a [UserOperation](UserOperation), `None` while it is pending.
    #[method(name = "getUserOperationReceipt")]
    async fn get_user_operation_receipt(
        &self,
        user_operation_hash: UserOperationHash,
    ) -> RpcResult<Option<UserOperationReceipt>>;
}
