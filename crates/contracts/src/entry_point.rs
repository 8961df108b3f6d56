pub use super::gen::EntryPointAPI;
use crate::error::ContractCallError;
use ethers::{
    providers::Middleware,
    types::{Address, U256},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct EntryPoint<M: Middleware + 'static> {
    eth_client: Arc<M>,
    address: Address,
    entry_point_api: EntryPointAPI<M>,
}

impl<M: Middleware + 'static> EntryPoint<M> {
    pub fn new(eth_client: Arc<M>, address: Address) -> Self {
        let entry_point_api = EntryPointAPI::new(address, eth_client.clone());
        Self { eth_client, address, entry_point_api }
    }

    pub fn entry_point_api(&self) -> &EntryPointAPI<M> {
        &self.entry_point_api
    }

    pub fn eth_client(&self) -> Arc<M> {
        self.eth_client.clone()
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Next nonce of `sender` under the 192-bit `key`
    pub async fn get_nonce(&self, sender: &Address, key: U256) -> Result<U256, ContractCallError> {
        self.entry_point_api
            .get_nonce(*sender, key)
            .call()
            .await
            .map_err(ContractCallError::from_contract_error)
    }
}
