pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod helpers;
pub mod json_client;
pub mod logging;
pub mod pagination;
pub mod services;
pub mod transport;
pub mod types;

pub use auth::{AuthDispatchHandler, Credential, GuardState, HandlerGuard, PROJECT_ID_HEADER};
pub use client::BlockfrostClient;
pub use config::{BlockfrostProject, Config, Settings};
pub use endpoint::Endpoint;
pub use errors::{BlockfrostError, ErrorBody, SdkError};
pub use json_client::{JsonClient, RequestBody};
pub use pagination::{Order, Pagination};
pub use types::Network;
