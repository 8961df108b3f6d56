//! Account abstraction (ERC-4337) and Kernel-related constants

/// Entry point smart contract
pub mod entry_point {
    /// Address of the entry point smart contract
    pub const ADDRESS: &str = "0x0000000071727De22E5E9d8BAf0edAc6f37da032";
}

/// Kernel smart account (v3.1)
pub mod kernel {
    /// Kernel factory used to deploy accounts (no meta factory)
    pub const FACTORY_ADDRESS: &str = "0xaac5D4240AF87249B3f71BC8E4A2cae074A3E419";
    /// ECDSA validator plugin used as the root (sudo) validator
    pub const ECDSA_VALIDATOR_ADDRESS: &str = "0x845ADb2C711129d4f3966735eD98a9F09fC4cE57";
    /// Index used in the factory salt
    pub const DEFAULT_INDEX: u64 = 0;

    /// Validation type prefix of a validator in a `ValidationId` (bytes21)
    pub const VALIDATION_TYPE_VALIDATOR: u8 = 0x01;
    /// Validator mode in the nonce key (default, no enable mode)
    pub const VALIDATOR_MODE_DEFAULT: u8 = 0x00;
    /// Validator type in the nonce key (root validator)
    pub const VALIDATOR_TYPE_ROOT: u8 = 0x00;

    /// ERC-7579 call type of a single call
    pub const CALL_TYPE_SINGLE: u8 = 0x00;
    /// ERC-7579 call type of a batch call
    pub const CALL_TYPE_BATCH: u8 = 0x01;

    /// Signature with the right shape used for gas estimation and sponsorship
    pub const DUMMY_ECDSA_SIGNATURE: &str = "0xfffffffffffffffffffffffffffffff0000000000000000000000000000000007aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1c";
}

/// Paymaster
pub mod paymaster {
    /// USDe token on the Ethena testnet, used to pay for gas
    pub const USDE_ADDRESS: &str = "0x426E7d03f9803Dd11cb8616C65b99a3c0AfeA6dE";
    /// Default amount (in ether units) approved for the paymaster
    pub const DEFAULT_APPROVE_AMOUNT: &str = "1";
}

/// Waiting for user operation receipts
pub mod receipt {
    /// Default upper bound for waiting on a receipt (in milliseconds)
    pub const TIMEOUT_MS: u64 = 1_000_000;
    /// Default time between two receipt polls (in milliseconds)
    pub const POLL_INTERVAL_MS: u64 = 1_000;
}

/// Environment variables
pub mod env {
    pub const BUNDLER_RPC: &str = "BUNDLER_RPC";
    pub const PAYMASTER_RPC: &str = "PAYMASTER_RPC";
    pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
}
