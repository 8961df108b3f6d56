use super::args::SendArgs;
use crate::config::Config;
use ethers::{
    providers::{Http, Provider},
    types::Address,
    utils::to_checksum,
};
use keel_account::{KernelAccount, KernelAccountClient, KernelAccountConfig, ZeroDevPaymaster};
use keel_primitives::{Call, ChainSpec, Wallet};
use keel_rpc::build_http_client;
use std::{io::Write, str::FromStr, sync::Arc};
use tracing::{debug, info};

/// Usage hint printed for an unknown or missing action
pub const INVALID_ACTION: &str = "Invalid action. Use 'getAddress' or 'sendTransaction'.";

/// What the command does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the counterfactual address of the account
    GetAddress,
    /// Send a sponsored user operation and wait for its inclusion
    SendTransaction,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getAddress" => Ok(Self::GetAddress),
            "sendTransaction" => Ok(Self::SendTransaction),
            _ => Err(format!("unknown action {s}")),
        }
    }
}

/// Runs the action, writing status lines to `out`
///
/// An unknown or missing action prints the usage hint and succeeds without touching the network.
pub async fn execute<W: Write>(
    action: Option<&str>,
    config: &Config,
    args: &SendArgs,
    chain: &ChainSpec,
    out: &mut W,
) -> eyre::Result<()> {
    let Some(action) = action.and_then(|a| a.parse::<Action>().ok()) else {
        writeln!(out, "{INVALID_ACTION}")?;
        return Ok(());
    };
    debug!("Running {action:?} on {} with {config:?}", chain.name);

    let account = connect(config, chain).await?;
    match action {
        Action::GetAddress => get_address(&account, out),
        Action::SendTransaction => send_transaction(account, config, args, chain, out).await,
    }
}

/// Kernel account of the configured owner, reading the chain through the bundler endpoint
async fn connect(
    config: &Config,
    chain: &ChainSpec,
) -> eyre::Result<KernelAccount<Provider<Http>>> {
    let provider = Arc::new(Provider::<Http>::try_from(config.bundler_rpc.as_str())?);
    let wallet = Wallet::from_private_key(&config.private_key, chain.id)?;
    Ok(KernelAccount::new(provider, wallet, KernelAccountConfig::v3_1()?).await?)
}

fn get_address<W: Write>(
    account: &KernelAccount<Provider<Http>>,
    out: &mut W,
) -> eyre::Result<()> {
    writeln!(out, "My account address: {}", to_checksum(&account.address(), None))?;
    Ok(())
}

async fn send_transaction<W: Write>(
    account: KernelAccount<Provider<Http>>,
    config: &Config,
    args: &SendArgs,
    chain: &ChainSpec,
    out: &mut W,
) -> eyre::Result<()> {
    writeln!(out, "Gas token address {}", to_checksum(&args.gas_token, None))?;

    let paymaster = ZeroDevPaymaster::new(
        build_http_client(&config.paymaster_rpc)?,
        chain.id,
        account.entry_point(),
    );
    let approve = paymaster.erc20_approve_call(args.gas_token, args.approve_amount).await?;
    let calls = [approve, Call::empty(Address::zero())];

    let client = KernelAccountClient::new(account, build_http_client(&config.bundler_rpc)?)
        .with_sponsor(paymaster, Some(args.gas_token));

    let hash = client.send_user_operation(&calls).await?;
    writeln!(out, "UserOp hash: {hash}")?;

    let receipt = client
        .wait_for_user_operation_receipt(hash, args.receipt_timeout(), args.poll_interval())
        .await?;
    let tx_hash = receipt.transaction_hash();
    info!("User operation {hash} succeeded: {}", receipt.success);

    writeln!(out, "UserOp completed: {tx_hash:?}")?;
    writeln!(out, "View on explorer: {}", chain.tx_url(&tx_hash))?;
    Ok(())
}
