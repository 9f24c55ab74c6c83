//! Configuration for the image attacher
//!
//! Credentials and the table name come from the environment (optionally via a
//! `.env` file). Field names and the batching schedule are fixed defaults that
//! tests can override through the builder methods.

mod validation;

pub use validation::Validate;

use crate::utils::error::{AttacherError, Result};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable holding the Airtable personal access token
pub const ENV_ACCESS_TOKEN: &str = "AIRTABLE_ACCESS_TOKEN";
/// Environment variable holding the Airtable base identifier
pub const ENV_BASE_ID: &str = "AIRTABLE_BASE_ID";
/// Environment variable holding the table name
pub const ENV_TABLE_NAME: &str = "AIRTABLE_TABLE_NAME";
/// Environment variable overriding the REST API root
pub const ENV_API_BASE: &str = "AIRTABLE_API_BASE";

/// Default Airtable REST API root
pub const DEFAULT_API_BASE: &str = "https://api.airtable.com/v0";
/// Field holding the source image URL
pub const DEFAULT_URL_FIELD: &str = "imageUrl";
/// Field receiving the attachment
pub const DEFAULT_ATTACHMENT_FIELD: &str = "Image";
/// Rows updated concurrently per batch
pub const DEFAULT_BATCH_SIZE: usize = 5;
/// Pause between consecutive batches
pub const DEFAULT_BATCH_PAUSE: Duration = Duration::from_millis(1000);
/// Whole-request timeout for store and image requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime configuration, passed explicitly into the orchestrator
#[derive(Clone)]
pub struct AttacherConfig {
    /// Airtable personal access token
    pub access_token: String,
    /// Airtable base identifier
    pub base_id: String,
    /// Table whose rows are processed
    pub table_name: String,
    /// REST API root, without trailing slash
    pub api_base: String,
    /// Field holding the source image URL
    pub url_field: String,
    /// Field receiving the attachment reference
    pub attachment_field: String,
    /// Maximum rows per batch
    pub batch_size: usize,
    /// Pause between batches (not after the last)
    pub batch_pause: Duration,
    /// Whole-request timeout for outbound HTTP
    pub http_timeout: Duration,
}

impl AttacherConfig {
    /// Create a config with the fixed defaults for everything but credentials
    pub fn new(
        access_token: impl Into<String>,
        base_id: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            base_id: base_id.into(),
            table_name: table_name.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            url_field: DEFAULT_URL_FIELD.to_string(),
            attachment_field: DEFAULT_ATTACHMENT_FIELD.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            batch_pause: DEFAULT_BATCH_PAUSE,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => return Err(AttacherError::config(format!("Failed to load .env file: {}", e))),
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.validate().map_err(AttacherError::Config)?;
        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| {
                    AttacherError::config(format!("Required environment variable {} not found", key))
                })
        };

        let mut config = Self::new(
            required(ENV_ACCESS_TOKEN)?,
            required(ENV_BASE_ID)?,
            required(ENV_TABLE_NAME)?,
        );

        if let Some(api_base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_base(api_base);
        }

        debug!(
            base_id = %config.base_id,
            table = %config.table_name,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Override the REST API root
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the batch size, at least 1
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the pause between batches
    pub fn with_batch_pause(mut self, pause: Duration) -> Self {
        self.batch_pause = pause;
        self
    }

    /// Set the outbound HTTP timeout
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }
}

impl fmt::Debug for AttacherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttacherConfig")
            .field("access_token", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .field("api_base", &self.api_base)
            .field("url_field", &self.url_field)
            .field("attachment_field", &self.attachment_field)
            .field("batch_size", &self.batch_size)
            .field("batch_pause", &self.batch_pause)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
