use crate::endpoint::Endpoint;
use crate::errors::SdkError;
use crate::transport::{BoxTransport, HttpRequest, HttpResponse};
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderValue, Method};
use serde::de::DeserializeOwned;
use std::fmt;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use tracing::{debug, error, warn};

/// Payload of a POST request, sent as-is with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    bytes: Bytes,
    content_type: HeaderValue,
}

impl RequestBody {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            bytes: Bytes::from(text.into()),
            content_type: HeaderValue::from_static("text/plain; charset=utf-8"),
        }
    }

    pub fn binary(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: HeaderValue::from_static("application/octet-stream"),
        }
    }

    /// CBOR-encoded payload, e.g. a signed transaction for `/tx/submit`.
    pub fn cbor(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: HeaderValue::from_static("application/cbor"),
        }
    }

    pub fn with_content_type(mut self, content_type: HeaderValue) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Shared dispatcher behind every service: builds URLs, sends one request
/// through the transport stack and decodes the answer.
#[derive(Clone)]
pub struct JsonClient {
    base_url: String,
    transport: BoxTransport,
}

impl fmt::Debug for JsonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl JsonClient {
    pub fn new(base_url: impl Into<String>, transport: BoxTransport) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, endpoint: &Endpoint) -> Result<String, SdkError> {
        endpoint.build_url(&self.base_url)
    }

    pub async fn get<T>(&self, endpoint: Endpoint, cancel: &CancellationToken) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(&endpoint)?;

        self.send_get(&url, cancel).await
    }

    pub async fn post<T>(
        &self,
        endpoint: Endpoint,
        body: RequestBody,
        cancel: &CancellationToken,
    ) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(&endpoint)?;

        self.send_post(&url, body, cancel).await
    }

    pub async fn send_get<T>(&self, url: &str, cancel: &CancellationToken) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(get_request(url)?, cancel).await?;

        decode_json(url, response)
    }

    pub async fn send_get_text(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<String, SdkError> {
        let response = self.dispatch(get_request(url)?, cancel).await?;

        decode_text(url, response)
    }

    pub async fn send_post<T>(
        &self,
        url: &str,
        body: RequestBody,
        cancel: &CancellationToken,
    ) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(post_request(url, body)?, cancel).await?;

        decode_json(url, response)
    }

    pub async fn send_post_text(
        &self,
        url: &str,
        body: RequestBody,
        cancel: &CancellationToken,
    ) -> Result<String, SdkError> {
        let response = self.dispatch(post_request(url, body)?, cancel).await?;

        decode_text(url, response)
    }

    async fn dispatch(
        &self,
        request: HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, SdkError> {
        if cancel.is_cancelled() {
            return Err(SdkError::Cancelled);
        }

        let method = request.method().clone();
        let uri = request.uri().clone();
        debug!(%method, %uri, "JsonClient request");

        let exchange = self.transport.clone().oneshot(request);

        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                debug!(%method, %uri, "JsonClient request cancelled");
                Err(SdkError::Cancelled)
            },
            result = exchange => result.map_err(SdkError::Transport),
        }
    }
}

fn get_request(url: &str) -> Result<HttpRequest, SdkError> {
    Ok(http::Request::builder()
        .method(Method::GET)
        .uri(url)
        .header(ACCEPT, "application/json")
        .body(Bytes::new())?)
}

fn post_request(url: &str, body: RequestBody) -> Result<HttpRequest, SdkError> {
    Ok(http::Request::builder()
        .method(Method::POST)
        .uri(url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, body.content_type)
        .body(body.bytes)?)
}

fn success_body(url: &str, response: HttpResponse) -> Result<Bytes, SdkError> {
    let status = response.status();
    let body = response.into_body();

    if status.is_success() {
        return Ok(body);
    }

    warn!(url, status = %status, "Blockfrost API returned an error");

    Err(SdkError::from_status(status, &body))
}

fn decode_json<T>(url: &str, response: HttpResponse) -> Result<T, SdkError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = success_body(url, response)?;

    serde_json::from_slice(&body).map_err(|e| {
        let body_text = String::from_utf8_lossy(&body).into_owned();
        error!(
            url,
            status = %status,
            response_body = %body_text,
            error = %e,
            "JsonClient failed to parse response"
        );

        SdkError::Decode {
            source: e,
            body: body_text,
        }
    })
}

fn decode_text(url: &str, response: HttpResponse) -> Result<String, SdkError> {
    let body = success_body(url, response)?;

    String::from_utf8(body.to_vec()).map_err(|e| SdkError::Decode {
        source: <serde_json::Error as serde::de::Error>::custom(e),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
