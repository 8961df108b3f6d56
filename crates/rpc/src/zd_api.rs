use crate::types::{
    PaymasterAccountsRequest, SponsorUserOperationRequest, SponsorUserOperationResult,
    UserOperationGasPrice,
};
use ethers::types::Address;
use jsonrpsee::{core::RpcResult, proc_macros::rpc};

/// ZeroDev bundler extensions (`zd` namespace)
#[rpc(client, server, namespace = "zd")]
pub trait ZdBundlerApi {
    /// Gas prices (slow, standard, fast) the bundler accepts for user operations
    #[method(name = "getUserOperationGasPrice")]
    async fn get_user_operation_gas_price(&self) -> RpcResult<UserOperationGasPrice>;
}

/// ZeroDev paymaster methods (`zd` namespace)
#[rpc(client, server, namespace = "zd")]
pub trait ZdPaymasterApi {
    /// Paymaster contracts serving the chain and entry point
    #[method(name = "pm_accounts")]
    async fn pm_accounts(&self, request: PaymasterAccountsRequest) -> RpcResult<Vec<Address>>;

    /// Sponsors the user operation, optionally charging an ERC-20 gas token
    #[method(name = "sponsorUserOperation")]
    async fn sponsor_user_operation(
        &self,
        request: SponsorUserOperationRequest,
    ) -> RpcResult<SponsorUserOperationResult>;
}
