//! Kernel smart account client
//!
//! Derives the account address through the Kernel factory, builds v0.7 user operations for a
//! list of calls, has them sponsored by a ZeroDev paymaster, signs them with the owner key and
//! submits them to a bundler.

mod client;
mod error;
mod kernel;
mod paymaster;

pub use client::{KernelAccountClient, Sponsor};
pub use error::AccountError;
pub use kernel::{KernelAccount, KernelAccountConfig};
pub use paymaster::ZeroDevPaymaster;
