use crate::{config::Config, utils::run_until_ctrl_c};
use clap::{value_parser, Parser};
use keel_primitives::ChainSpec;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;

/// The main Keel CLI interface
#[derive(Debug, Parser)]
#[command(author, version, about = "Keel", long_about = None)]
pub struct Cli {
    /// The action to run: `getAddress` or `sendTransaction`
    #[clap(allow_hyphen_values = true)]
    action: Option<String>,

    /// Anything after the action is ignored
    #[clap(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,

    /// Sponsored transaction args
    #[clap(flatten)]
    send: args::SendArgs,

    /// The verbosity level
    #[clap(long, short, global = true, default_value_t = 2, value_parser = value_parser!(u8).range(..=4))]
    verbosity: u8,
}

impl Cli {
    /// Get the log level based on the verbosity level
    pub fn get_log_level(&self) -> String {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
        .into()
    }
}

pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();

    let rust_log = match std::env::var("RUST_LOG") {
        Ok(val) => format!("{val},keel={}", cli.get_log_level()),
        Err(_) => format!("keel={}", cli.get_log_level()),
    };
    std::env::set_var("RUST_LOG", rust_log);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let chain = ChainSpec::ethena_testnet();

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    let task = async move {
        let mut out = std::io::stdout().lock();
        commands::execute(cli.action.as_deref(), &config, &cli.send, &chain, &mut out).await
    };

    rt.block_on(run_until_ctrl_c(task))
}
