use crate::client::BlockfrostClient;
use crate::config::{Config, Settings};
use crate::errors::SdkError;
use crate::helpers::decode_tx_file;
use crate::json_client::RequestBody;
use crate::pagination::{Order, Pagination};
use crate::types::{LogLevel, Network};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

#[derive(Parser, Debug)]
#[command(author,
          name = "blockfrost-sdk",
          bin_name = "blockfrost-sdk",
          version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_REVISION"), ")"),
          about,
          long_about = None)]
pub struct Args {
    #[arg(short, long, value_name = "FILE", help = "Path to an existing configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub project_id: Option<String>,

    #[arg(long)]
    pub network: Option<Network>,

    /// Overrides the network's API root, e.g. for a self-hosted instance
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long = "request-timeout-sec")]
    pub request_timeout: Option<u64>,

    #[arg(long)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageArgs {
    #[arg(long)]
    pub count: Option<u32>,

    #[arg(long)]
    pub page: Option<u32>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// API root information
    Info,
    /// Backend health status
    Health,
    LatestBlock,
    Block {
        hash_or_number: String,
    },
    NextBlocks {
        hash_or_number: String,
        #[command(flatten)]
        page: PageArgs,
    },
    PreviousBlocks {
        hash_or_number: String,
        #[command(flatten)]
        page: PageArgs,
    },
    BlockTxs {
        hash_or_number: String,
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        order: Option<Order>,
    },
    Tx {
        hash: String,
    },
    TxUtxos {
        hash: String,
    },
    /// Submit a signed transaction, raw CBOR or hex encoded
    Submit {
        file: PathBuf,
    },
}

impl Args {
    /// Settings given on the command line, highest precedence.
    pub fn overrides(&self) -> Settings {
        Settings {
            project_id: self.project_id.clone(),
            network: self.network,
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout,
            log_level: self.log_level,
        }
    }

    pub fn resolve_config(&self) -> Result<Config, SdkError> {
        let settings = Settings::load(self.config.as_deref())?.merge(self.overrides());

        Config::from_settings(settings)
    }
}

fn to_json(value: impl Serialize) -> Result<Value> {
    serde_json::to_value(value).context("failed to serialize the response")
}

impl Command {
    pub async fn run(&self, client: &BlockfrostClient, cancel: &CancellationToken) -> Result<Value> {
        match self {
            Command::Info => to_json(client.health().root(cancel).await?),
            Command::Health => to_json(client.health().health(cancel).await?),
            Command::LatestBlock => to_json(client.blocks().latest(cancel).await?),
            Command::Block { hash_or_number } => {
                to_json(client.blocks().by_hash_or_number(hash_or_number, cancel).await?)
            },
            Command::NextBlocks {
                hash_or_number,
                page,
            } => {
                let pagination = Pagination::new(page.count, page.page, None);
                to_json(client.blocks().next(hash_or_number, &pagination, cancel).await?)
            },
            Command::PreviousBlocks {
                hash_or_number,
                page,
            } => {
                let pagination = Pagination::new(page.count, page.page, None);
                to_json(
                    client
                        .blocks()
                        .previous(hash_or_number, &pagination, cancel)
                        .await?,
                )
            },
            Command::BlockTxs {
                hash_or_number,
                page,
                order,
            } => {
                let pagination = Pagination::new(page.count, page.page, *order);
                to_json(client.blocks().txs(hash_or_number, &pagination, cancel).await?)
            },
            Command::Tx { hash } => to_json(client.transactions().by_hash(hash, cancel).await?),
            Command::TxUtxos { hash } => to_json(client.transactions().utxos(hash, cancel).await?),
            Command::Submit { file } => {
                let contents = tokio::fs::read(file)
                    .await
                    .with_context(|| format!("failed to read {}", file.display()))?;
                let body = RequestBody::cbor(decode_tx_file(&contents));

                to_json(client.transactions().submit(body, cancel).await?)
            },
        }
    }
}
