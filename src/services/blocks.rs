use crate::endpoint::Endpoint;
use crate::errors::SdkError;
use crate::json_client::JsonClient;
use crate::pagination::Pagination;
use crate::types::{BlockResponse, BlockTxsResponse, BlocksResponse};
use tokio_util::sync::CancellationToken;

/// `/blocks` endpoint family.
#[derive(Debug, Clone)]
pub struct BlocksService {
    client: JsonClient,
}

impl BlocksService {
    pub fn new(client: JsonClient) -> Self {
        Self { client }
    }

    pub async fn latest(&self, cancel: &CancellationToken) -> Result<BlockResponse, SdkError> {
        self.client.get(Endpoint::new("/blocks/latest"), cancel).await
    }

    pub async fn by_hash_or_number(
        &self,
        hash_or_number: &str,
        cancel: &CancellationToken,
    ) -> Result<BlockResponse, SdkError> {
        let endpoint =
            Endpoint::new("/blocks/{hash_or_number}").path_param("hash_or_number", hash_or_number);

        self.client.get(endpoint, cancel).await
    }

    pub async fn next(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
        cancel: &CancellationToken,
    ) -> Result<BlocksResponse, SdkError> {
        pagination.validate()?;
        let endpoint = Endpoint::new("/blocks/{hash_or_number}/next")
            .path_param("hash_or_number", hash_or_number)
            .query("count", pagination.count)
            .query("page", pagination.page);

        self.client.get(endpoint, cancel).await
    }

    pub async fn previous(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
        cancel: &CancellationToken,
    ) -> Result<BlocksResponse, SdkError> {
        pagination.validate()?;
        let endpoint = Endpoint::new("/blocks/{hash_or_number}/previous")
            .path_param("hash_or_number", hash_or_number)
            .query("count", pagination.count)
            .query("page", pagination.page);

        self.client.get(endpoint, cancel).await
    }

    pub async fn by_slot(
        &self,
        slot_number: u64,
        cancel: &CancellationToken,
    ) -> Result<BlockResponse, SdkError> {
        let endpoint =
            Endpoint::new("/blocks/slot/{slot_number}").path_param("slot_number", slot_number);

        self.client.get(endpoint, cancel).await
    }

    pub async fn by_epoch_slot(
        &self,
        epoch_number: u32,
        slot_number: u64,
        cancel: &CancellationToken,
    ) -> Result<BlockResponse, SdkError> {
        let endpoint = Endpoint::new("/blocks/epoch/{epoch_number}/slot/{slot_number}")
            .path_param("epoch_number", epoch_number)
            .path_param("slot_number", slot_number);

        self.client.get(endpoint, cancel).await
    }

    /// Hashes of the transactions included in the block.
    pub async fn txs(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
        cancel: &CancellationToken,
    ) -> Result<BlockTxsResponse, SdkError> {
        pagination.validate()?;
        let endpoint = Endpoint::new("/blocks/{hash_or_number}/txs")
            .path_param("hash_or_number", hash_or_number)
            .paginate(pagination);

        self.client.get(endpoint, cancel).await
    }

    pub async fn latest_txs(
        &self,
        pagination: &Pagination,
        cancel: &CancellationToken,
    ) -> Result<BlockTxsResponse, SdkError> {
        pagination.validate()?;
        let endpoint = Endpoint::new("/blocks/latest/txs").paginate(pagination);

        self.client.get(endpoint, cancel).await
    }
}
