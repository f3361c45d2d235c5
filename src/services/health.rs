use crate::endpoint::Endpoint;
use crate::errors::SdkError;
use crate::json_client::JsonClient;
use crate::types::{ClockResponse, HealthResponse, RootResponse};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct HealthService {
    client: JsonClient,
}

impl HealthService {
    pub fn new(client: JsonClient) -> Self {
        Self { client }
    }

    /// API root, reports the backend url and version.
    pub async fn root(&self, cancel: &CancellationToken) -> Result<RootResponse, SdkError> {
        self.client.get(Endpoint::new("/"), cancel).await
    }

    pub async fn health(&self, cancel: &CancellationToken) -> Result<HealthResponse, SdkError> {
        self.client.get(Endpoint::new("/health"), cancel).await
    }

    pub async fn clock(&self, cancel: &CancellationToken) -> Result<ClockResponse, SdkError> {
        self.client.get(Endpoint::new("/health/clock"), cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpRequest, boxed};
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use tower::{BoxError, service_fn};

    fn answering(body: &'static str) -> (HealthService, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let transport = boxed(service_fn(move |req: HttpRequest| {
            log.lock().unwrap().push(req.uri().to_string());
            async move { Ok::<_, BoxError>(http::Response::new(Bytes::from_static(body.as_bytes()))) }
        }));

        let client = JsonClient::new("https://api.example/api/v0", transport);
        (HealthService::new(client), seen)
    }

    #[tokio::test]
    async fn test_clock() {
        let (health, seen) = answering(r#"{"server_time":1603400958947}"#);

        let clock = health.clock(&CancellationToken::new()).await.unwrap();

        assert_eq!(clock.server_time, 1603400958947);
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            ["https://api.example/api/v0/health/clock"]
        );
    }

    #[tokio::test]
    async fn test_root() {
        let (health, seen) = answering(r#"{"url":"https://blockfrost.io/","version":"0.1.0"}"#);

        let root = health.root(&CancellationToken::new()).await.unwrap();

        assert_eq!(root.version, "0.1.0");
        assert_eq!(seen.lock().unwrap().as_slice(), ["https://api.example/api/v0/"]);
    }
}
