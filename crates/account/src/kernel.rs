//! Kernel v3.1 smart account owned by an ECDSA validator
use crate::error::AccountError;
use ethers::{
    providers::Middleware,
    types::{Address, Bytes, U256},
};
use keel_contracts::{
    kernel::{create_account_data, encode_calls, initialize_data, nonce_key},
    EntryPoint, KernelFactory,
};
use keel_primitives::{
    constants::{entry_point, kernel},
    Call, UserOperation, Wallet,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Deployment parameters of the account
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelAccountConfig {
    pub entry_point: Address,
    pub factory: Address,
    pub validator: Address,
    pub index: u64,
}

impl KernelAccountConfig {
    /// Kernel v3.1 with the ECDSA validator on entry point v0.7
    pub fn v3_1() -> eyre::Result<Self> {
        Ok(Self {
            entry_point: entry_point::ADDRESS.parse()?,
            factory: kernel::FACTORY_ADDRESS.parse()?,
            validator: kernel::ECDSA_VALIDATOR_ADDRESS.parse()?,
            index: kernel::DEFAULT_INDEX,
        })
    }
}

/// Smart account whose address is derived from the owner key
#[derive(Clone)]
pub struct KernelAccount<M: Middleware + 'static> {
    eth_client: Arc<M>,
    wallet: Wallet,
    config: KernelAccountConfig,
    address: Address,
    init_data: Bytes,
    entry_point: EntryPoint<M>,
}

impl<M: Middleware + 'static> KernelAccount<M> {
    /// Asks the factory for the counterfactual address of the account owned by `wallet`
    pub async fn new(
        eth_client: Arc<M>,
        wallet: Wallet,
        config: KernelAccountConfig,
    ) -> Result<Self, AccountError> {
        let init_data = initialize_data(config.validator, wallet.address());
        let factory = KernelFactory::new(eth_client.clone(), config.factory);
        let address = factory.get_address(init_data.clone(), config.index).await?;

        info!("Kernel account {address:?} for owner {:?}", wallet.address());

        let entry_point = EntryPoint::new(eth_client.clone(), config.entry_point);
        Ok(Self { eth_client, wallet, config, address, init_data, entry_point })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn owner(&self) -> Address {
        self.wallet.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.wallet.chain_id()
    }

    pub fn entry_point(&self) -> Address {
        self.config.entry_point
    }

    pub fn config(&self) -> &KernelAccountConfig {
        &self.config
    }

    /// `(factory, factoryData)` deploying the account
    pub fn factory_args(&self) -> (Address, Bytes) {
        (self.config.factory, create_account_data(self.init_data.clone(), self.config.index))
    }

    /// Whether the account contract already has code
    pub async fn is_deployed(&self) -> Result<bool, AccountError> {
        let code =
            self.eth_client.get_code(self.address, None).await.map_err(AccountError::provider)?;
        Ok(!code.is_empty())
    }

    /// Entry point nonce under the root validator key
    pub async fn nonce(&self) -> Result<U256, AccountError> {
        let key = nonce_key(self.config.validator, 0);
        let nonce = self.entry_point.get_nonce(&self.address, key).await?;
        debug!("Nonce of {:?}: {nonce}", self.address);
        Ok(nonce)
    }

    /// Kernel `execute` calldata for the calls
    pub fn encode_calls(&self, calls: &[Call]) -> Result<Bytes, AccountError> {
        Ok(encode_calls(calls)?)
    }

    /// Placeholder signature with the shape of the validator's real signature
    pub fn dummy_signature(&self) -> Bytes {
        kernel::DUMMY_ECDSA_SIGNATURE.parse().unwrap_or_default()
    }

    /// Signs the user operation with the owner key (root validator signature)
    pub async fn sign_user_operation(
        &self,
        uo: &UserOperation,
    ) -> Result<UserOperation, AccountError> {
        self.wallet
            .sign_user_operation(uo, &self.config.entry_point)
            .await
            .map_err(|e| AccountError::Signer(e.to_string()))
    }
}
