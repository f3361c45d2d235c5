use crate::auth::{AuthDispatchHandler, HandlerGuard};
use crate::config::Config;
use crate::errors::SdkError;
use crate::json_client::JsonClient;
use crate::services::{BlocksService, HealthService, TransactionsService};
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, boxed};
use crate::types::Network;
use tower::{BoxError, Service};
use tracing::info;

/// Composition root: owns the single authorized transport stack and hands
/// out the services sharing it.
#[derive(Debug, Clone)]
pub struct BlockfrostClient {
    network: Network,
    json_client: JsonClient,
    blocks: BlocksService,
    transactions: TransactionsService,
    health: HealthService,
}

impl BlockfrostClient {
    /// Builds against the process-wide [`HandlerGuard`], so only the first
    /// call in a process succeeds.
    pub fn new(config: &Config) -> Result<Self, SdkError> {
        Self::with_guard(config, HandlerGuard::global())
    }

    pub fn with_guard(config: &Config, guard: &HandlerGuard) -> Result<Self, SdkError> {
        let transport = ReqwestTransport::new(config.request_timeout)?;

        Self::with_transport(config, guard, transport)
    }

    pub fn with_transport<S>(config: &Config, guard: &HandlerGuard, inner: S) -> Result<Self, SdkError>
    where
        S: Service<HttpRequest, Response = HttpResponse, Error = BoxError>
            + Clone
            + Send
            + Sync
            + 'static,
        S::Future: Send + 'static,
    {
        let handler = AuthDispatchHandler::with_inner(guard, inner, &config.project)?;
        let json_client = JsonClient::new(config.base_url(), boxed(handler));

        info!(
            project = %config.project.name,
            network = %config.project.network,
            base_url = config.base_url(),
            "Blockfrost client ready"
        );

        Ok(Self {
            network: config.project.network,
            blocks: BlocksService::new(json_client.clone()),
            transactions: TransactionsService::new(json_client.clone()),
            health: HealthService::new(json_client.clone()),
            json_client,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn blocks(&self) -> &BlocksService {
        &self.blocks
    }

    pub fn transactions(&self) -> &TransactionsService {
        &self.transactions
    }

    pub fn health(&self) -> &HealthService {
        &self.health
    }

    /// Direct access to the dispatcher, for endpoints without a service.
    pub fn json_client(&self) -> &JsonClient {
        &self.json_client
    }
}
