use crate::errors::SdkError;
use bytes::Bytes;
use futures::future::BoxFuture;
use reqwest::Client;
use std::task::{Context, Poll};
use std::time::Duration;
use tower::util::BoxCloneSyncService;
use tower::{BoxError, Service};

pub type HttpRequest = http::Request<Bytes>;
pub type HttpResponse = http::Response<Bytes>;

/// Type-erased transport stack shared by every service.
pub type BoxTransport = BoxCloneSyncService<HttpRequest, HttpResponse, BoxError>;

/// Erases the concrete type of a transport stack.
pub fn boxed<S>(service: S) -> BoxTransport
where
    S: Service<HttpRequest, Response = HttpResponse, Error = BoxError>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    BoxCloneSyncService::new(service)
}

/// Default transport, sends requests with [`reqwest`] and buffers the
/// whole response body.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(request_timeout: Duration) -> Result<Self, SdkError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| SdkError::Configuration(format!("failed to build client: {e}")))?;

        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Service<HttpRequest> for ReqwestTransport {
    type Response = HttpResponse;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<HttpResponse, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: HttpRequest) -> Self::Future {
        let client = self.client.clone();

        Box::pin(async move {
            let req = reqwest::Request::try_from(req)?;
            let resp = client.execute(req).await?;

            let status = resp.status();
            let version = resp.version();
            let headers = resp.headers().clone();
            let body = resp.bytes().await?;

            let mut response = http::Response::new(body);
            *response.status_mut() = status;
            *response.version_mut() = version;
            *response.headers_mut() = headers;

            Ok(response)
        })
    }
}
