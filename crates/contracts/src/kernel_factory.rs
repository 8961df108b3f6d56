pub use super::gen::KernelFactoryAPI;
use crate::{error::ContractCallError, kernel::account_salt};
use ethers::{
    providers::Middleware,
    types::{Address, Bytes},
};
use std::sync::Arc;

/// Kernel factory deploying accounts as deterministic proxies
#[derive(Clone)]
pub struct KernelFactory<M: Middleware + 'static> {
    address: Address,
    factory_api: KernelFactoryAPI<M>,
}

impl<M: Middleware + 'static> KernelFactory<M> {
    pub fn new(eth_client: Arc<M>, address: Address) -> Self {
        Self { address, factory_api: KernelFactoryAPI::new(address, eth_client) }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Counterfactual address of the account initialized with `init_data` (read-only call)
    pub async fn get_address(
        &self,
        init_data: Bytes,
        index: u64,
    ) -> Result<Address, ContractCallError> {
        self.factory_api
            .get_address(init_data, account_salt(index))
            .call()
            .await
            .map_err(ContractCallError::from_contract_error)
    }
}
