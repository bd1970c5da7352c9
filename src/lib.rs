//! # endpoint-client
//!
//! endpoint-client turns a description of an HTTP endpoint into exactly one
//! request and a decoded, typed response.
//!
//! Describe the endpoint by implementing [`DataRequest`] (or use the plain
//! [`Endpoint`] value), then hand it to an [`ApiClient`]:
//!
//! ```no_run
//! use endpoint_client::{ApiClient, Endpoint, Method, ReqwestApiClient};
//! use reqwest::Url;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Game {
//!     id: u32,
//!     name: String,
//! }
//!
//! # async fn run() -> endpoint_client::Result<()> {
//! let endpoint = Endpoint::new(Url::parse("https://api.example.com")?, "/games/1", Method::Get)
//!     .with_header("Accept", "application/json")
//!     .with_parameter("key", "abc");
//!
//! let client = ReqwestApiClient::<Endpoint>::default();
//! let game: Game = client.request(&endpoint).await?;
//! println!("{} {}", game.id, game.name);
//! # Ok(())
//! # }
//! ```
//!
//! A status outside `200..=299` fails with
//! [`ErrorResponse::InvalidResponse`], an endpoint whose URL cannot be built
//! fails with [`ErrorResponse::InvalidEndpoint`] before anything is sent.
//! Body decoding errors are passed through as they come from `serde_json`.
//! Nothing is retried.

pub mod api_client;
pub mod data_request;
pub mod error_response;

pub use api_client::reqwest::ReqwestApiClient;
pub use api_client::ApiClient;
pub use data_request::{DataRequest, Endpoint, Method, ParamValue};
pub use error_response::{DatabaseError, ErrorResponse};

pub type Result<T> = anyhow::Result<T>;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub ssl_check: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { ssl_check: true }
    }
}

impl ClientConfig {
    pub fn new(ssl_check: bool) -> Self {
        Self { ssl_check }
    }
}
