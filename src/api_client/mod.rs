use ::reqwest::Url;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::data_request::{DataRequest, Parameters};
use crate::error_response::ErrorResponse;
use crate::{ClientConfig, Result};


pub mod body;
pub mod reqwest;

/// Characters escaped in query keys and values. Everything outside ASCII is
/// always escaped by `utf8_percent_encode`.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[async_trait]
pub trait ApiClient {
    type Endpoint: DataRequest + Sync;

    fn create(config: ClientConfig) -> Result<Self>
    where
        Self: Sized;

    /// Issues one request for `endpoint` and decodes the JSON body as `T`.
    async fn request<T>(&self, endpoint: &Self::Endpoint) -> Result<T>
    where
        T: DeserializeOwned + Send;
}

/// Builds the final URL for `endpoint`.
///
/// The endpoint path replaces whatever path the base URL carries. When
/// parameters are given they replace the base query; values without a query
/// representation are skipped.
pub fn resolve_url<E>(endpoint: &E) -> std::result::Result<Url, ErrorResponse>
where
    E: DataRequest + ?Sized,
{
    let mut url = endpoint.base_url();
    let path = endpoint.path();

    if url.cannot_be_a_base() {
        return Err(ErrorResponse::InvalidEndpoint);
    }
    if url.has_authority() && !path.is_empty() && !path.starts_with('/') {
        return Err(ErrorResponse::InvalidEndpoint);
    }
    if !url.has_authority() && path.starts_with("//") {
        return Err(ErrorResponse::InvalidEndpoint);
    }
    url.set_path(&path);

    if let Some(parameters) = endpoint.parameters() {
        url.set_query(Some(&encode_query(&parameters)));
    }

    Ok(url)
}

fn encode_query(parameters: &Parameters) -> String {
    parameters
        .iter()
        .filter_map(|(key, value)| {
            let value = value.to_query_value()?;
            Some(format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_COMPONENT),
                utf8_percent_encode(&value, QUERY_COMPONENT)
            ))
        })
        .collect::<Vec<_>>()
        .join("&")
}
