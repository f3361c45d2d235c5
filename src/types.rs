use blockfrost_openapi::models::{
    block_content::BlockContent, tx_content::TxContent,
    tx_content_delegations_inner::TxContentDelegationsInner,
    tx_content_metadata_cbor_inner::TxContentMetadataCborInner,
    tx_content_metadata_inner::TxContentMetadataInner, tx_content_mirs_inner::TxContentMirsInner,
    tx_content_stake_addr_inner::TxContentStakeAddrInner, tx_content_utxo::TxContentUtxo,
    tx_content_withdrawals_inner::TxContentWithdrawalsInner,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::Level;

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Preview,
    Preprod,
    Ipfs,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Preview => "preview",
            Self::Preprod => "preprod",
            Self::Ipfs => "ipfs",
        }
    }

    /// Canonical API root for the network.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://cardano-mainnet.blockfrost.io/api/v0",
            Self::Testnet => "https://cardano-testnet.blockfrost.io/api/v0",
            Self::Preview => "https://cardano-preview.blockfrost.io/api/v0",
            Self::Preprod => "https://cardano-preprod.blockfrost.io/api/v0",
            Self::Ipfs => "https://ipfs.blockfrost.io/api/v0",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Self::Testnet | Self::Preview | Self::Preprod)
    }

    /// Project ids are prefixed with the network they were issued for.
    pub fn from_project_id(project_id: &str) -> Option<Self> {
        [
            Self::Mainnet,
            Self::Testnet,
            Self::Preview,
            Self::Preprod,
            Self::Ipfs,
        ]
        .into_iter()
        .find(|network| project_id.starts_with(network.as_str()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

// blocks
pub type BlockResponse = BlockContent;
pub type BlocksResponse = Vec<BlockContent>;
pub type BlockTxsResponse = Vec<String>;

// txs
pub type TxResponse = TxContent;
pub type TxUtxosResponse = TxContentUtxo;
pub type TxDelegationsResponse = Vec<TxContentDelegationsInner>;
pub type TxWithdrawalsResponse = Vec<TxContentWithdrawalsInner>;
pub type TxMirsResponse = Vec<TxContentMirsInner>;
pub type TxStakeAddrResponse = Vec<TxContentStakeAddrInner>;
pub type TxMetadataResponse = Vec<TxContentMetadataInner>;
pub type TxMetadataCborResponse = Vec<TxContentMetadataCborInner>;
pub type TxSubmitResponse = String;

// health
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RootResponse {
    pub url: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub is_healthy: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClockResponse {
    pub server_time: i64,
}
