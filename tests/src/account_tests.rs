use crate::common::{account_address, kernel_account, start_mock_server, MockState, TEST_KEY};
use ethers::{
    abi::AbiDecode,
    providers::{Http, Provider},
    types::{Address, U256},
};
use keel_account::{AccountError, KernelAccount, KernelAccountConfig};
use keel_contracts::{
    entry_point_api::GetNonceCall,
    kernel::{account_salt, create_account_data, initialize_data, nonce_key},
    kernel_factory_api::{CreateAccountCall, GetAddressCall},
};
use keel_primitives::Wallet;
use std::sync::Arc;

#[tokio::test]
async fn derives_address_from_factory() -> eyre::Result<()> {
    let server = start_mock_server(MockState::default()).await?;
    let account = kernel_account(&server).await?;
    let config = KernelAccountConfig::v3_1()?;
    let owner = Wallet::from_private_key(TEST_KEY, 1)?.address();

    assert_eq!(account.address(), account_address());
    assert_eq!(account.owner(), owner);

    let state = server.state();
    assert_eq!(state.factory_calls.len(), 1);
    let call = GetAddressCall::decode(&state.factory_calls[0])?;
    assert_eq!(call.data, initialize_data(config.validator, owner));
    assert_eq!(call.salt, account_salt(0));

    Ok(())
}

#[tokio::test]
async fn same_key_same_address() -> eyre::Result<()> {
    let server = start_mock_server(MockState::default()).await?;
    let first = kernel_account(&server).await?;
    let second = kernel_account(&server).await?;

    assert_eq!(first.address(), second.address());
    let state = server.state();
    assert_eq!(state.factory_calls[0], state.factory_calls[1]);

    Ok(())
}

#[tokio::test]
async fn factory_args_deploy_same_account() -> eyre::Result<()> {
    let server = start_mock_server(MockState::default()).await?;
    let account = kernel_account(&server).await?;
    let config = KernelAccountConfig::v3_1()?;

    let (factory, factory_data) = account.factory_args();
    assert_eq!(factory, config.factory);

    let create = CreateAccountCall::decode(&factory_data)?;
    let get = GetAddressCall::decode(&server.state().factory_calls[0])?;
    assert_eq!(create.data, get.data);
    assert_eq!(create.salt, get.salt);
    assert_eq!(factory_data, create_account_data(get.data, config.index));

    Ok(())
}

#[tokio::test]
async fn reads_nonce_under_root_validator_key() -> eyre::Result<()> {
    let server =
        start_mock_server(MockState { nonce: U256::from(7), ..Default::default() }).await?;
    let account = kernel_account(&server).await?;

    assert_eq!(account.nonce().await?, U256::from(7));

    let call = GetNonceCall::decode(&server.state().nonce_keys[0])?;
    assert_eq!(call.sender, account.address());
    assert_eq!(call.key, nonce_key(account.config().validator, 0));

    Ok(())
}

#[tokio::test]
async fn detects_deployment() -> eyre::Result<()> {
    let server = start_mock_server(MockState::default()).await?;
    let account = kernel_account(&server).await?;
    assert!(!account.is_deployed().await?);

    server.node.state.lock().deployed = true;
    assert!(account.is_deployed().await?);

    Ok(())
}

#[tokio::test]
async fn unknown_factory_fails() -> eyre::Result<()> {
    let server = start_mock_server(MockState::default()).await?;
    let provider = Arc::new(Provider::<Http>::try_from(server.url.as_str())?);
    let wallet = Wallet::from_private_key(TEST_KEY, 1)?;
    let config =
        KernelAccountConfig { factory: Address::repeat_byte(0x01), ..KernelAccountConfig::v3_1()? };

    let res = KernelAccount::new(provider, wallet, config).await;
    assert!(matches!(res, Err(AccountError::Contract(_))));

    Ok(())
}
