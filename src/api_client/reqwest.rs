use crate::api_client::{resolve_url, ApiClient};
use crate::data_request::{DataRequest, Method};
use crate::error_response::ErrorResponse;
use crate::{ClientConfig, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use tracing::{debug, warn};

static SHARED_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// [`ApiClient`] backed by `reqwest`.
///
/// Holds nothing but a client handle, so one instance can serve any number
/// of concurrent requests.
pub struct ReqwestApiClient<E> {
    client: Client,
    endpoint: PhantomData<fn(&E)>,
}

impl<E> ReqwestApiClient<E> {
    /// Client sharing the process-wide connection pool.
    ///
    /// Pooled connections stay tied to the runtime that opened them; callers
    /// running several tokio runtimes should build one client per runtime
    /// with [`ApiClient::create`].
    pub fn new() -> Self {
        Self::with_client(SHARED_CLIENT.clone())
    }

    pub fn with_client(client: Client) -> Self {
        ReqwestApiClient {
            client,
            endpoint: PhantomData,
        }
    }
}

impl<E> Default for ReqwestApiClient<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ReqwestApiClient<E> {
    fn clone(&self) -> Self {
        Self::with_client(self.client.clone())
    }
}

impl<E> Debug for ReqwestApiClient<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestApiClient")
            .field("client", &self.client)
            .finish()
    }
}

impl<E: DataRequest> ReqwestApiClient<E> {
    /// Turns `endpoint` into a ready-to-send request without touching the
    /// network.
    pub fn build_request(&self, endpoint: &E) -> Result<reqwest::Request> {
        let url = resolve_url(endpoint)?;
        let mut request_builder = self.client.request((&endpoint.method()).into(), url);
        if let Some(headers) = endpoint.headers() {
            request_builder = set_headers(&headers, request_builder);
        }

        Ok(request_builder.build()?)
    }
}

#[async_trait]
impl<E> ApiClient for ReqwestApiClient<E>
where
    E: DataRequest + Sync,
{
    type Endpoint = E;

    fn create(config: ClientConfig) -> Result<Self>
    where
        Self: Sized,
    {
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.ssl_check)
            .build()?;

        Ok(Self::with_client(client))
    }

    async fn request<T>(&self, endpoint: &E) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let request = self.build_request(endpoint)?;
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %response.url(), "rejecting response");
            return Err(ErrorResponse::InvalidResponse.into());
        }
        debug!(status = status.as_u16(), "decoding response");

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn set_headers(headers: &[(String, String)], mut request_builder: RequestBuilder) -> RequestBuilder {
    for (key, value) in headers {
        request_builder = request_builder.header(key, value);
    }
    request_builder
}

impl From<&Method> for reqwest::Method {
    fn from(method: &Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}
