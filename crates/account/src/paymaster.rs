//! ZeroDev paymaster: sponsorship and ERC-20 gas token approval
use crate::error::AccountError;
use ethers::{
    abi::AbiEncode,
    types::{Address, U256},
};
use keel_contracts::erc20::ApproveCall;
use keel_primitives::{Call, UserOperation};
use keel_rpc::{
    types::{
        GasTokenData, PaymasterAccountsRequest, SponsorUserOperationRequest,
        SponsorUserOperationResult,
    },
    ZdPaymasterApiClient,
};
use tracing::{debug, info};

/// Paymaster service bound to a chain and an entry point
#[derive(Clone, Debug)]
pub struct ZeroDevPaymaster<P> {
    client: P,
    chain_id: u64,
    entry_point: Address,
}

impl<P> ZeroDevPaymaster<P>
where
    P: ZdPaymasterApiClient + Send + Sync,
{
    pub fn new(client: P, chain_id: u64, entry_point: Address) -> Self {
        Self { client, chain_id, entry_point }
    }

    /// Paymaster contract that pulls the gas token (`zd_pm_accounts`)
    pub async fn paymaster_address(&self) -> Result<Address, AccountError> {
        let accounts = self
            .client
            .pm_accounts(PaymasterAccountsRequest {
                chain_id: self.chain_id,
                entry_point_address: self.entry_point,
            })
            .await
            .map_err(AccountError::paymaster)?;

        accounts.first().copied().ok_or(AccountError::NoPaymasterAccount {
            chain_id: self.chain_id,
            entry_point: self.entry_point,
        })
    }

    /// Call approving `amount` of `gas_token` to the paymaster contract
    pub async fn erc20_approve_call(
        &self,
        gas_token: Address,
        amount: U256,
    ) -> Result<Call, AccountError> {
        let spender = self.paymaster_address().await?;
        debug!("Approving {amount} of {gas_token:?} to paymaster {spender:?}");
        Ok(Call::new(gas_token, U256::zero(), ApproveCall { spender, amount }.encode().into()))
    }

    /// Asks the paymaster to sponsor the user operation, charging `gas_token` if given
    pub async fn sponsor_user_operation(
        &self,
        uo: &UserOperation,
        gas_token: Option<Address>,
    ) -> Result<SponsorUserOperationResult, AccountError> {
        let request = SponsorUserOperationRequest {
            chain_id: self.chain_id,
            user_op: uo.clone(),
            entry_point_address: self.entry_point,
            gas_token_data: gas_token.map(|token_address| GasTokenData { token_address }),
            should_override_fee: false,
            should_consume: true,
        };

        let result =
            self.client.sponsor_user_operation(request).await.map_err(AccountError::paymaster)?;
        info!("User operation sponsored by paymaster {:?}", result.paymaster);
        Ok(result)
    }
}
