use crate::utils::{parse_address, parse_ether_amount};
use clap::Parser;
use ethers::types::{Address, U256};
use keel_primitives::constants::{paymaster, receipt};
use std::time::Duration;

/// Sponsored transaction CLI args
#[derive(Debug, Clone, Parser, PartialEq)]
pub struct SendArgs {
    /// ERC-20 token the paymaster charges for gas.
    ///
    /// By default, this option is set to USDe.
    #[clap(long, default_value = paymaster::USDE_ADDRESS, value_parser=parse_address)]
    pub gas_token: Address,

    /// Amount of the gas token approved to the paymaster, in ether units.
    #[clap(long, default_value = paymaster::DEFAULT_APPROVE_AMOUNT, value_parser=parse_ether_amount)]
    pub approve_amount: U256,

    /// How long to wait for the user operation receipt, in milliseconds.
    #[clap(long, default_value_t = receipt::TIMEOUT_MS)]
    pub receipt_timeout: u64,

    /// Receipt polling interval, in milliseconds.
    #[clap(long, default_value_t = receipt::POLL_INTERVAL_MS)]
    pub poll_interval: u64,
}

impl SendArgs {
    pub fn receipt_timeout(&self) -> Duration {
        Duration::from_millis(self.receipt_timeout)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval)
    }
}

impl Default for SendArgs {
    fn default() -> Self {
        Self::parse_from(["keel"])
    }
}
