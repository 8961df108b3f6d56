//! Chain descriptors
use ethers::{
    types::{Address, H256},
    utils::to_checksum,
};
use serde::{Deserialize, Serialize};

/// Native currency metadata of a chain
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Block explorer of a chain
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockExplorer {
    pub name: String,
    pub url: String,
}

/// Static description of the chain the account lives on
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainSpec {
    pub id: u64,
    pub name: String,
    pub native_currency: NativeCurrency,
    pub rpc_url: String,
    pub block_explorer: BlockExplorer,
}

impl ChainSpec {
    /// Ethena testnet (chain id 52085143)
    pub fn ethena_testnet() -> Self {
        Self {
            id: 52_085_143,
            name: "Ethena".into(),
            native_currency: NativeCurrency {
                name: "Ether".into(),
                symbol: "ETH".into(),
                decimals: 18,
            },
            rpc_url: "https://rpc-ethena-testnet-0.t.conduit.xyz".into(),
            block_explorer: BlockExplorer {
                name: "Explorer".into(),
                url: "https://explorer-ethena-testnet-0.t.conduit.xyz".into(),
            },
        }
    }

    /// Link to a transaction on the block explorer
    pub fn tx_url(&self, hash: &H256) -> String {
        format!("{}/tx/{hash:?}", self.explorer_base())
    }

    /// Link to an address on the block explorer
    pub fn address_url(&self, address: &Address) -> String {
        format!("{}/address/{}", self.explorer_base(), to_checksum(address, None))
    }

    fn explorer_base(&self) -> &str {
        self.block_explorer.url.trim_end_matches('/')
    }
}
