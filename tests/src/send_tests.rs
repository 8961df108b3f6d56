use crate::common::{
    account_address, account_client, paymaster_address, sponsored_client, start_mock_server,
    transaction_hash, MockState, CHAIN_ID, TEST_KEY,
};
use ethers::{
    abi::AbiDecode,
    types::{Address, Signature, U256},
    utils::parse_ether,
};
use keel_account::{AccountError, KernelAccountConfig};
use keel_contracts::{kernel::encode_calls, kernel_api::ExecuteCall};
use keel_primitives::{constants::paymaster::USDE_ADDRESS, Call, UserOperationHash, Wallet};
use std::time::Duration;

const POLL: Duration = Duration::from_millis(10);

fn owner() -> Address {
    Wallet::from_private_key(TEST_KEY, CHAIN_ID).map(|w| w.address()).unwrap_or_default()
}

#[tokio::test]
async fn sponsored_user_operation() -> eyre::Result<()> {
    let server = start_mock_server(MockState::default()).await?;
    let token: Address = USDE_ADDRESS.parse()?;
    let client = sponsored_client(&server, Some(token)).await?;

    let sponsor = client.sponsor().expect("sponsored client");
    let approve = sponsor.paymaster.erc20_approve_call(token, parse_ether(1)?).await?;
    let calls = vec![approve, Call::empty(client.account().address())];
    let hash = client.send_user_operation(&calls).await?;

    let state = server.state();
    assert_eq!(state.sent.len(), 1);
    let uo = &state.sent[0];
    let entry_point = KernelAccountConfig::v3_1()?.entry_point;

    assert_eq!(uo.sender, account_address());
    assert_eq!(uo.call_data, encode_calls(&calls)?);
    assert!(ExecuteCall::decode(&uo.call_data).is_ok());
    assert_eq!(uo.factory, Some(KernelAccountConfig::v3_1()?.factory));
    assert_eq!(uo.paymaster, Some(paymaster_address()));
    assert_eq!(uo.call_gas_limit, U256::from(90_000));
    assert_eq!(uo.verification_gas_limit, U256::from(200_000));
    assert_eq!(uo.max_fee_per_gas, U256::from(2_000_000));
    assert_eq!(hash, uo.hash(&entry_point, CHAIN_ID));

    let signature = Signature::try_from(&uo.signature[..])?;
    assert_eq!(signature.recover(hash.as_bytes())?, owner());

    // sponsorship saw the unsigned operation with the placeholder signature
    let sponsored = &state.sponsor_requests[0].user_op;
    assert_eq!(sponsored.signature, client.account().dummy_signature());
    assert!(sponsored.paymaster.is_none());

    assert!(state.estimations.is_empty());

    Ok(())
}

#[tokio::test]
async fn unsponsored_user_operation_is_estimated() -> eyre::Result<()> {
    let server = start_mock_server(MockState { deployed: true, ..Default::default() }).await?;
    let client = account_client(&server).await?;

    client.send_user_operation(&[Call::empty(Address::repeat_byte(0x11))]).await?;

    let state = server.state();
    assert_eq!(state.estimations.len(), 1);
    assert!(state.sponsor_requests.is_empty());

    let uo = &state.sent[0];
    assert!(uo.factory.is_none());
    assert!(uo.paymaster.is_none());
    assert_eq!(uo.call_gas_limit, U256::from(80_000));
    assert_eq!(uo.pre_verification_gas, U256::from(50_000));

    Ok(())
}

#[tokio::test]
async fn no_calls_rejected() -> eyre::Result<()> {
    let server = start_mock_server(MockState::default()).await?;
    let client = account_client(&server).await?;

    let res = client.send_user_operation(&[]).await;
    assert!(matches!(res, Err(AccountError::Encoding(_))));
    assert!(!server.state().has_mutating_requests());

    Ok(())
}

#[tokio::test]
async fn sponsorship_failure_stops_submission() -> eyre::Result<()> {
    let server = start_mock_server(MockState {
        sponsor_error: Some("insufficient gas token allowance".into()),
        ..Default::default()
    })
    .await?;
    let client = sponsored_client(&server, None).await?;

    let res = client.send_user_operation(&[Call::empty(account_address())]).await;
    assert!(matches!(res, Err(AccountError::Paymaster(_))));
    assert!(server.state().sent.is_empty());

    Ok(())
}

#[tokio::test]
async fn bundler_rejection() -> eyre::Result<()> {
    let server = start_mock_server(MockState {
        send_error: Some("AA21 didn't pay prefund".into()),
        ..Default::default()
    })
    .await?;
    let client = sponsored_client(&server, None).await?;

    let res = client.send_user_operation(&[Call::empty(account_address())]).await;
    match res {
        Err(AccountError::Bundler(msg)) => assert!(msg.contains("AA21")),
        other => panic!("unexpected result: {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn waits_for_receipt() -> eyre::Result<()> {
    let server =
        start_mock_server(MockState { pending_polls: Some(3), ..Default::default() }).await?;
    let client = sponsored_client(&server, None).await?;

    let hash = client.send_user_operation(&[Call::empty(account_address())]).await?;
    let receipt =
        client.wait_for_user_operation_receipt(hash, Duration::from_secs(5), POLL).await?;

    assert_eq!(receipt.user_operation_hash, hash);
    assert_eq!(receipt.transaction_hash(), transaction_hash());
    assert_eq!(receipt.sender, account_address());

    let polls = server
        .state()
        .requests
        .iter()
        .filter(|r| r.as_str() == "eth_getUserOperationReceipt")
        .count();
    assert_eq!(polls, 4);

    Ok(())
}

#[tokio::test]
async fn receipt_timeout() -> eyre::Result<()> {
    let server = start_mock_server(MockState { pending_polls: None, ..Default::default() }).await?;
    let client = account_client(&server).await?;
    let hash = UserOperationHash::repeat_byte(0x42);

    let res = client.wait_for_user_operation_receipt(hash, Duration::from_millis(50), POLL).await;
    match res {
        Err(AccountError::ReceiptTimeout { hash: h, .. }) => assert_eq!(h, hash),
        other => panic!("unexpected result: {other:?}"),
    }

    Ok(())
}
