use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::{
    Client, Method, Url,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::args::{DEFAULT_USER_AGENT, TesterArgs};
use crate::error::{HttpError, TransportError, ValidationError};

/// A fully prepared request. Built once per run and reused for every attempt.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl OutboundRequest {
    /// JSON POST; the bearer header is only added for a non-empty token.
    ///
    /// # Errors
    ///
    /// Returns an error when the token cannot be used as a header value.
    pub fn json_post(url: Url, body: Bytes, auth_token: &str) -> Result<Self, ValidationError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !auth_token.is_empty() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", auth_token))
                .map_err(|err| ValidationError::InvalidAuthToken { source: err })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(Self {
            method: Method::POST,
            url,
            headers,
            body,
        })
    }
}

/// Sends one request and reports the response status.
#[async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when no complete response was received.
    async fn send(&self, request: &OutboundRequest) -> Result<u16, TransportError>;
}

/// Builds a dedicated transport for each worker.
pub trait TransportFactory: Send + Sync {
    type Transport: Transport + 'static;

    /// # Errors
    ///
    /// Returns an error when the transport cannot be created.
    fn build(&self, worker_id: usize) -> Result<Self::Transport, HttpError>;
}

#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    pub connect_timeout: Option<Duration>,
    pub insecure: bool,
    pub disable_keepalive: bool,
}

impl ClientSettings {
    #[must_use]
    pub const fn from_args(args: &TesterArgs) -> Self {
        Self {
            connect_timeout: args.connect_timeout,
            insecure: args.insecure,
            disable_keepalive: args.disable_keepalive,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<u16, TransportError> {
        let response = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone())
            .body(request.body.clone())
            .send()
            .await
            .map_err(TransportError::from_send)?;
        let status = response.status().as_u16();
        drain_response_body(response)
            .await
            .map_err(TransportError::from_body)?;
        Ok(status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransportFactory {
    settings: ClientSettings,
}

impl ReqwestTransportFactory {
    #[must_use]
    pub const fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }
}

impl TransportFactory for ReqwestTransportFactory {
    type Transport = ReqwestTransport;

    fn build(&self, worker_id: usize) -> Result<ReqwestTransport, HttpError> {
        let mut client_builder = Client::builder().user_agent(DEFAULT_USER_AGENT);

        if let Some(connect_timeout) = self.settings.connect_timeout {
            client_builder = client_builder.connect_timeout(connect_timeout);
        }

        if self.settings.disable_keepalive {
            client_builder = client_builder
                .pool_max_idle_per_host(0)
                .pool_idle_timeout(Some(Duration::from_secs(0)));
        }

        if self.settings.insecure {
            client_builder = client_builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        let client = client_builder
            .build()
            .map_err(|err| HttpError::BuildClientFailed {
                worker_id,
                source: err,
            })?;
        Ok(ReqwestTransport { client })
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
