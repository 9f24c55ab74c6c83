//! Image fetching
//!
//! Downloads a candidate image once to confirm it is reachable and is served
//! with an `image/*` content type. Status and content type are checked before
//! the body is read, so rejected responses are dropped unread. Every rejection
//! is logged and turned into `None`; nothing here aborts the run.

use crate::utils::error::{AttacherError, Result};
use crate::utils::net::{HttpClientConfig, create_client};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Response body, read only on demand
#[derive(Debug)]
pub enum FetchBody {
    Ready(Bytes),
    Pending(reqwest::Response),
}

impl FetchBody {
    /// Read the remaining body
    pub async fn bytes(self) -> Result<Bytes> {
        match self {
            Self::Ready(bytes) => Ok(bytes),
            Self::Pending(response) => Ok(response.bytes().await?),
        }
    }
}

impl From<Bytes> for FetchBody {
    fn from(bytes: Bytes) -> Self {
        Self::Ready(bytes)
    }
}

/// Status line and headers of a response; the body has not been read yet
#[derive(Debug)]
pub struct FetchResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: FetchBody,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound GET capability
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Issue exactly one GET, returning once the headers have arrived
    async fn get(&self, url: &str) -> Result<FetchResponse>;
}

/// `HttpFetch` backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build with a dedicated client
    pub fn from_config(config: &HttpClientConfig) -> Result<Self> {
        Ok(Self::new(create_client(config)?))
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        debug!(url, "GET image");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AttacherError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(FetchResponse {
            status,
            content_type,
            body: FetchBody::Pending(response),
        })
    }
}

/// Why a fetched URL was not accepted as an image
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch image: HTTP {0}")]
    Status(u16),

    #[error("Invalid content type: {}", .0.as_deref().unwrap_or("<missing>"))]
    ContentType(Option<String>),

    #[error(transparent)]
    Transport(#[from] AttacherError),
}

/// Fetch `url` and return its bytes if it is served as an image
pub async fn fetch_image(client: &dyn HttpFetch, url: &str) -> Option<Bytes> {
    match try_fetch_image(client, url).await {
        Ok(body) => {
            debug!(url, bytes = body.len(), "Fetched image");
            Some(body)
        }
        Err(FetchError::Transport(e)) => {
            error!(url, "Error fetching image from {}: {}", url, e);
            None
        }
        Err(e) => {
            warn!(url, "Error fetching image from {}: {}", url, e);
            None
        }
    }
}

/// Fetch `url`, reporting why it was rejected
pub async fn try_fetch_image(
    client: &dyn HttpFetch,
    url: &str,
) -> std::result::Result<Bytes, FetchError> {
    let response = client.get(url).await?;

    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }

    match response.content_type.as_deref() {
        Some(ct) if ct.starts_with("image/") => Ok(response.body.bytes().await?),
        _ => Err(FetchError::ContentType(response.content_type)),
    }
}
