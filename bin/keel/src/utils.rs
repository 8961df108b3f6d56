use ethers::{
    types::{Address, U256},
    utils::parse_ether,
};
use pin_utils::pin_mut;
use std::{future::Future, io, str::FromStr};
use tracing::info;

/// Parses address from string
pub fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|_| format!("String {s} is not a valid address"))
}

/// Parses an amount in ether into wei
pub fn parse_ether_amount(s: &str) -> Result<U256, String> {
    parse_ether(s).map_err(|_| format!("String {s} is not a valid ether amount"))
}

/// Runs the future to completion or until:
/// - `ctrl-c` is received.
/// - `SIGTERM` is received (unix only).
///
/// A signal ends the run with an [`io::ErrorKind::Interrupted`] error.
pub async fn run_until_ctrl_c<F, E>(fut: F) -> Result<(), E>
where
    F: Future<Output = Result<(), E>>,
    E: Send + Sync + 'static + From<io::Error>,
{
    let mut stream = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    let signal = async move {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => "ctrl-c",
            _ = stream.recv() => "SIGTERM",
        }
    };

    run_until_signal(fut, signal).await
}

/// Runs the future to completion unless `signal` resolves first with the signal's name
pub async fn run_until_signal<F, S, E>(fut: F, signal: S) -> Result<(), E>
where
    F: Future<Output = Result<(), E>>,
    S: Future<Output = &'static str>,
    E: From<io::Error>,
{
    pin_mut!(signal, fut);

    tokio::select! {
        name = signal => {
            info!("Received {name} signal.");
            Err(io::Error::new(io::ErrorKind::Interrupted, format!("interrupted by {name}")).into())
        },
        res = fut => res,
    }
}
