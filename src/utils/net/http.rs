//! HTTP client construction
//!
//! The store client and the image fetcher share one pooled `reqwest::Client`
//! so that keep-alive connections to the same hosts are reused across batches.
//!
//! # Usage
//!
//! ```rust,ignore
//! use image_attacher::utils::net::{HttpClientConfig, create_client};
//!
//! let client = create_client(&HttpClientConfig::default())?;
//! let response = client.get("https://example.com/a.png").send().await?;
//! ```

use crate::utils::error::Result;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Configuration for the shared HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,
    /// Idle connection timeout
    pub pool_idle_timeout: Duration,
    /// User agent string
    pub user_agent: &'static str,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_max_idle_per_host: 10,
            pool_idle_timeout: Duration::from_secs(90),
            user_agent: concat!("image-attacher/", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Set the whole-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Create an HTTP client with the given settings
pub fn create_client(config: &HttpClientConfig) -> Result<Client> {
    debug!(
        timeout_secs = config.timeout.as_secs(),
        "Creating shared HTTP client"
    );

    let client = ClientBuilder::new()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(config.pool_idle_timeout)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .tcp_nodelay(true)
        .user_agent(config.user_agent)
        .build()?;

    Ok(client)
}
