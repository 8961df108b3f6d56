//! Account client: prepares, sponsors, signs, submits and awaits user operations
use crate::{error::AccountError, kernel::KernelAccount, paymaster::ZeroDevPaymaster};
use ethers::{providers::Middleware, types::Address};
use keel_primitives::{Call, UserOperation, UserOperationHash, UserOperationReceipt};
use keel_rpc::{types::GasPrice, EthApiClient, ZdBundlerApiClient, ZdPaymasterApiClient};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, trace};

/// Paymaster sponsorship applied to every user operation of the client
#[derive(Clone, Debug)]
pub struct Sponsor<P> {
    pub paymaster: ZeroDevPaymaster<P>,
    pub gas_token: Option<Address>,
}

pub struct KernelAccountClient<M: Middleware + 'static, B, P> {
    account: KernelAccount<M>,
    bundler: B,
    sponsor: Option<Sponsor<P>>,
}

impl<M, B, P> KernelAccountClient<M, B, P>
where
    M: Middleware + 'static,
    B: EthApiClient + ZdBundlerApiClient + Send + Sync,
    P: ZdPaymasterApiClient + Send + Sync,
{
    pub fn new(account: KernelAccount<M>, bundler: B) -> Self {
        Self { account, bundler, sponsor: None }
    }

    /// Sponsors user operations through the paymaster, charging `gas_token` if given
    pub fn with_sponsor(
        mut self,
        paymaster: ZeroDevPaymaster<P>,
        gas_token: Option<Address>,
    ) -> Self {
        self.sponsor = Some(Sponsor { paymaster, gas_token });
        self
    }

    pub fn account(&self) -> &KernelAccount<M> {
        &self.account
    }

    pub fn sponsor(&self) -> Option<&Sponsor<P>> {
        self.sponsor.as_ref()
    }

    /// Standard gas price accepted by the bundler
    pub async fn gas_price(&self) -> Result<GasPrice, AccountError> {
        let prices =
            self.bundler.get_user_operation_gas_price().await.map_err(AccountError::bundler)?;
        Ok(prices.standard)
    }

    /// User operation for the calls with nonce, factory fields, fees and a dummy signature
    pub async fn prepare_user_operation(
        &self,
        calls: &[Call],
    ) -> Result<UserOperation, AccountError> {
        let call_data = self.account.encode_calls(calls)?;
        let nonce = self.account.nonce().await?;
        let fees = self.gas_price().await?;

        let mut uo = UserOperation::default()
            .sender(self.account.address())
            .nonce(nonce)
            .call_data(call_data)
            .max_fee_per_gas(fees.max_fee_per_gas)
            .max_priority_fee_per_gas(fees.max_priority_fee_per_gas)
            .signature(self.account.dummy_signature());

        if !self.account.is_deployed().await? {
            let (factory, factory_data) = self.account.factory_args();
            debug!("Account {:?} not deployed, adding factory {factory:?}", uo.sender);
            uo = uo.factory(factory, factory_data);
        }

        Ok(uo)
    }

    /// Fills the gas limits, through the paymaster when sponsored, through the bundler otherwise
    pub async fn fill_gas(&self, uo: UserOperation) -> Result<UserOperation, AccountError> {
        match &self.sponsor {
            Some(sponsor) => {
                let result =
                    sponsor.paymaster.sponsor_user_operation(&uo, sponsor.gas_token).await?;
                Ok(result.apply(uo))
            }
            None => {
                let estimation = self
                    .bundler
                    .estimate_user_operation_gas(uo.clone(), self.account.entry_point())
                    .await
                    .map_err(AccountError::bundler)?;
                debug!("Gas estimation: {estimation:?}");
                Ok(uo
                    .call_gas_limit(estimation.call_gas_limit)
                    .verification_gas_limit(estimation.verification_gas_limit)
                    .pre_verification_gas(estimation.pre_verification_gas))
            }
        }
    }

    /// Prepares, sponsors (or estimates), signs and submits a user operation
    pub async fn send_user_operation(
        &self,
        calls: &[Call],
    ) -> Result<UserOperationHash, AccountError> {
        let uo = self.prepare_user_operation(calls).await?;
        let uo = self.fill_gas(uo).await?;
        let uo = self.account.sign_user_operation(&uo).await?;
        trace!("Signed user operation: {uo:?}");

        let hash = self
            .bundler
            .send_user_operation(uo, self.account.entry_point())
            .await
            .map_err(AccountError::bundler)?;
        info!("User operation {hash} submitted");
        Ok(hash)
    }

    /// Polls the bundler until the user operation is included or `timeout` elapses
    pub async fn wait_for_user_operation_receipt(
        &self,
        hash: UserOperationHash,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<UserOperationReceipt, AccountError> {
        let deadline = Instant::now() + timeout;

        loop {
            if let Some(receipt) = self
                .bundler
                .get_user_operation_receipt(hash)
                .await
                .map_err(AccountError::bundler)?
            {
                info!(
                    "User operation {hash} included in transaction {:?}",
                    receipt.transaction_hash()
                );
                return Ok(receipt);
            }

            if Instant::now() + poll_interval > deadline {
                return Err(AccountError::ReceiptTimeout { hash, timeout });
            }
            trace!("User operation {hash} pending");
            sleep(poll_interval).await;
        }
    }
}
