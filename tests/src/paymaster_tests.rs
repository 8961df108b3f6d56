use crate::common::{paymaster, paymaster_address, start_mock_server, MockState, CHAIN_ID};
use ethers::{
    abi::AbiDecode,
    types::{Address, U256},
    utils::parse_ether,
};
use keel_account::AccountError;
use keel_contracts::erc20::ApproveCall;
use keel_primitives::{constants::paymaster::USDE_ADDRESS, UserOperation};

#[tokio::test]
async fn approve_call_targets_token_and_paymaster() -> eyre::Result<()> {
    let server = start_mock_server(MockState::default()).await?;
    let paymaster = paymaster(&server)?;
    let token: Address = USDE_ADDRESS.parse()?;

    let call = paymaster.erc20_approve_call(token, parse_ether(1)?).await?;

    assert_eq!(call.to, token);
    assert_eq!(call.value, U256::zero());
    let approve = ApproveCall::decode(&call.data)?;
    assert_eq!(approve.spender, paymaster_address());
    assert_eq!(approve.amount, U256::exp10(18));

    Ok(())
}

#[tokio::test]
async fn no_paymaster_account() -> eyre::Result<()> {
    let server =
        start_mock_server(MockState { paymaster_accounts: vec![], ..Default::default() }).await?;
    let paymaster = paymaster(&server)?;

    let res = paymaster.paymaster_address().await;
    assert!(matches!(res, Err(AccountError::NoPaymasterAccount { chain_id: CHAIN_ID, .. })));

    Ok(())
}

#[tokio::test]
async fn sponsorship_request_carries_gas_token() -> eyre::Result<()> {
    let server = start_mock_server(MockState::default()).await?;
    let paymaster = paymaster(&server)?;
    let token: Address = USDE_ADDRESS.parse()?;
    let uo = UserOperation::default().sender(Address::repeat_byte(0xac));

    let result = paymaster.sponsor_user_operation(&uo, Some(token)).await?;
    assert_eq!(result.paymaster, paymaster_address());

    let request = &server.state().sponsor_requests[0];
    assert_eq!(request.chain_id, CHAIN_ID);
    assert_eq!(request.user_op, uo);
    assert_eq!(request.gas_token_data.as_ref().map(|d| d.token_address), Some(token));
    assert!(!request.should_override_fee);
    assert!(request.should_consume);

    Ok(())
}

#[tokio::test]
async fn sponsorship_denied() -> eyre::Result<()> {
    let server = start_mock_server(MockState {
        sponsor_error: Some("policy rejected".into()),
        ..Default::default()
    })
    .await?;
    let paymaster = paymaster(&server)?;

    let res = paymaster.sponsor_user_operation(&UserOperation::default(), None).await;
    match res {
        Err(AccountError::Paymaster(msg)) => assert!(msg.contains("policy rejected")),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(server.state().sponsor_requests[0].gas_token_data.is_none());

    Ok(())
}
