use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tower::BoxError;

/// Error body returned by the Blockfrost API.
/// Contains the following fields:
/// - error: a short description of the error
/// - message: a longer description of the error
/// - status_code: the HTTP status code the server answered with
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockfrostError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl fmt::Display for BlockfrostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.error, self.status_code, self.message)
    }
}

/// Body of a non-success response: parsed if it looked like a
/// [`BlockfrostError`], otherwise the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    Structured(BlockfrostError),
    Raw(String),
}

impl ErrorBody {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<BlockfrostError>(bytes) {
            Ok(parsed) => ErrorBody::Structured(parsed),
            Err(_) => ErrorBody::Raw(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    pub fn structured(&self) -> Option<&BlockfrostError> {
        match self {
            ErrorBody::Structured(bf) => Some(bf),
            ErrorBody::Raw(_) => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Structured(bf) => write!(f, "{bf}"),
            ErrorBody::Raw(text) => write!(f, "{text}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Bad request: {0}")]
    BadRequest(ErrorBody),

    #[error("Forbidden: {0}")]
    Forbidden(ErrorBody),

    #[error("Not found: {0}")]
    NotFound(ErrorBody),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(ErrorBody),

    #[error("Too many requests: {0}")]
    TooManyRequests(ErrorBody),

    #[error("Internal server error: {0}")]
    InternalServerError(ErrorBody),

    #[error("API error {status}: {body}")]
    Api { status: StatusCode, body: ErrorBody },

    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),
}

impl SdkError {
    /// Maps a non-success status and its body onto the matching error kind.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let body = ErrorBody::from_bytes(body);

        match status {
            StatusCode::BAD_REQUEST => SdkError::BadRequest(body),
            StatusCode::FORBIDDEN => SdkError::Forbidden(body),
            StatusCode::NOT_FOUND => SdkError::NotFound(body),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => SdkError::UnsupportedMediaType(body),
            StatusCode::TOO_MANY_REQUESTS => SdkError::TooManyRequests(body),
            StatusCode::INTERNAL_SERVER_ERROR => SdkError::InternalServerError(body),
            status => SdkError::Api { status, body },
        }
    }

    /// HTTP status of an API-reported error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SdkError::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            SdkError::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            SdkError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            SdkError::UnsupportedMediaType(_) => Some(StatusCode::UNSUPPORTED_MEDIA_TYPE),
            SdkError::TooManyRequests(_) => Some(StatusCode::TOO_MANY_REQUESTS),
            SdkError::InternalServerError(_) => Some(StatusCode::INTERNAL_SERVER_ERROR),
            SdkError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn error_body(&self) -> Option<&ErrorBody> {
        match self {
            SdkError::BadRequest(body)
            | SdkError::Forbidden(body)
            | SdkError::NotFound(body)
            | SdkError::UnsupportedMediaType(body)
            | SdkError::TooManyRequests(body)
            | SdkError::InternalServerError(body)
            | SdkError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        self.status().is_some()
    }
}

impl From<http::Error> for SdkError {
    fn from(err: http::Error) -> Self {
        SdkError::InvalidArgument(format!("Failed to build request: {err}"))
    }
}
