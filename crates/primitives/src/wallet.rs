//! A `Wallet` is a wrapper around an ethers local wallet that owns the Kernel account
use crate::{UserOperation, UserOperationHash};
use ethers::{
    prelude::k256::ecdsa::SigningKey,
    signers::{LocalWallet, Signer},
    types::{Address, Bytes},
};
use std::str::FromStr;
use thiserror::Error;

/// Errors when building a wallet from a private key
#[derive(Debug, Error)]
pub enum WalletError {
    /// The key is not 32 bytes of hex
    #[error("private key must be 32 bytes of hex (64 characters, optional 0x prefix)")]
    InvalidFormat,

    /// The key is not a valid secp256k1 scalar
    #[error("invalid private key: {0}")]
    InvalidKey(String),
}

/// Wrapper around ethers wallet
#[derive(Clone, Debug)]
pub struct Wallet {
    /// Signing key of the wallet
    pub signer: ethers::signers::Wallet<SigningKey>,
}

impl Wallet {
    /// Create a new wallet from a hex-encoded private key
    ///
    /// # Arguments
    /// * `private_key` - 32 bytes of hex with an optional `0x` prefix
    /// * `chain_id` - The chain id of the blockchain network to be used
    ///
    /// # Returns
    /// * `Self` - A new `Wallet` instance
    pub fn from_private_key(private_key: &str, chain_id: u64) -> Result<Self, WalletError> {
        validate_private_key(private_key)?;
        let signer = LocalWallet::from_str(private_key)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        Ok(Self { signer: signer.with_chain_id(chain_id) })
    }

    /// Address of the owner (EOA) behind the key
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Chain id the wallet signs for
    pub fn chain_id(&self) -> u64 {
        self.signer.chain_id()
    }

    /// Signs a user operation hash (EIP-191 personal message over the 32 hash bytes)
    pub async fn sign_hash(&self, hash: &UserOperationHash) -> eyre::Result<Bytes> {
        let sig = self.signer.sign_message(hash.as_bytes()).await?;
        Ok(sig.to_vec().into())
    }

    /// Signs the user operation
    ///
    /// # Arguments
    /// * `uo` - The [UserOperation](UserOperation) to be signed
    /// * `ep` - The entry point contract address
    ///
    /// # Returns
    /// * `UserOperation` - The signed [UserOperation](UserOperation)
    pub async fn sign_user_operation(
        &self,
        uo: &UserOperation,
        ep: &Address,
    ) -> eyre::Result<UserOperation> {
        let h = uo.hash(ep, self.chain_id());
        let signature = self.sign_hash(&h).await?;
        Ok(UserOperation { signature, ..uo.clone() })
    }
}

/// Checks that the key is 64 hex characters, with or without `0x`
pub fn validate_private_key(hex_string: &str) -> Result<(), WalletError> {
    let hex_string = hex_string.strip_prefix("0x").unwrap_or(hex_string);

    if hex_string.len() != 64 || !hex_string.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WalletError::InvalidFormat);
    }

    Ok(())
}
