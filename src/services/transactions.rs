use crate::endpoint::Endpoint;
use crate::errors::SdkError;
use crate::json_client::{JsonClient, RequestBody};
use crate::types::{
    TxDelegationsResponse, TxMetadataCborResponse, TxMetadataResponse, TxMirsResponse,
    TxResponse, TxStakeAddrResponse, TxSubmitResponse, TxUtxosResponse, TxWithdrawalsResponse,
};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// `/txs` endpoint family plus `/tx/submit`.
#[derive(Debug, Clone)]
pub struct TransactionsService {
    client: JsonClient,
}

impl TransactionsService {
    pub fn new(client: JsonClient) -> Self {
        Self { client }
    }

    async fn by_hash_at<T>(
        &self,
        template: &'static str,
        hash: &str,
        cancel: &CancellationToken,
    ) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
    {
        self.client
            .get(Endpoint::new(template).path_param("hash", hash), cancel)
            .await
    }

    pub async fn by_hash(&self, hash: &str, cancel: &CancellationToken) -> Result<TxResponse, SdkError> {
        self.by_hash_at("/txs/{hash}", hash, cancel).await
    }

    pub async fn utxos(
        &self,
        hash: &str,
        cancel: &CancellationToken,
    ) -> Result<TxUtxosResponse, SdkError> {
        self.by_hash_at("/txs/{hash}/utxos", hash, cancel).await
    }

    pub async fn delegations(
        &self,
        hash: &str,
        cancel: &CancellationToken,
    ) -> Result<TxDelegationsResponse, SdkError> {
        self.by_hash_at("/txs/{hash}/delegations", hash, cancel).await
    }

    pub async fn withdrawals(
        &self,
        hash: &str,
        cancel: &CancellationToken,
    ) -> Result<TxWithdrawalsResponse, SdkError> {
        self.by_hash_at("/txs/{hash}/withdrawals", hash, cancel).await
    }

    pub async fn mirs(
        &self,
        hash: &str,
        cancel: &CancellationToken,
    ) -> Result<TxMirsResponse, SdkError> {
        self.by_hash_at("/txs/{hash}/mirs", hash, cancel).await
    }

    pub async fn stakes(
        &self,
        hash: &str,
        cancel: &CancellationToken,
    ) -> Result<TxStakeAddrResponse, SdkError> {
        self.by_hash_at("/txs/{hash}/stakes", hash, cancel).await
    }

    pub async fn metadata(
        &self,
        hash: &str,
        cancel: &CancellationToken,
    ) -> Result<TxMetadataResponse, SdkError> {
        self.by_hash_at("/txs/{hash}/metadata", hash, cancel).await
    }

    pub async fn metadata_cbor(
        &self,
        hash: &str,
        cancel: &CancellationToken,
    ) -> Result<TxMetadataCborResponse, SdkError> {
        self.by_hash_at("/txs/{hash}/metadata/cbor", hash, cancel).await
    }

    /// Submits a serialized transaction, returns its id.
    pub async fn submit(
        &self,
        body: RequestBody,
        cancel: &CancellationToken,
    ) -> Result<TxSubmitResponse, SdkError> {
        if body.is_empty() {
            return Err(SdkError::InvalidArgument(
                "transaction body must not be empty".to_string(),
            ));
        }

        self.client.post(Endpoint::new("/tx/submit"), body, cancel).await
    }
}
