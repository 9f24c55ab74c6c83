//! Per-row update
//!
//! Validates the row's URL, confirms the image is reachable and then writes a
//! reference-style attachment. The locally fetched bytes are not uploaded; the
//! store downloads the URL itself when it receives the reference.

use crate::config::AttacherConfig;
use crate::core::fetcher::{HttpFetch, fetch_image};
use crate::core::record::{AttachmentRef, Record, RowOutcome, SkipReason};
use crate::core::store::RecordStore;
use crate::core::validator::{attachment_filename, is_valid_image};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{error, info};

/// Processes one row at a time; shared read-only across a batch
pub struct RecordUpdater {
    store: Arc<dyn RecordStore>,
    fetcher: Arc<dyn HttpFetch>,
    url_field: String,
    attachment_field: String,
}

impl RecordUpdater {
    pub fn new(
        config: &AttacherConfig,
        store: Arc<dyn RecordStore>,
        fetcher: Arc<dyn HttpFetch>,
    ) -> Self {
        Self {
            store,
            fetcher,
            url_field: config.url_field.clone(),
            attachment_field: config.attachment_field.clone(),
        }
    }

    /// Process one row; failures are logged and reported, never returned
    pub async fn update_record(&self, record: &Record) -> RowOutcome {
        let Some(image_url) = record.get_str(&self.url_field) else {
            info!(record_id = %record.id, "No image URL found for record {}", record.id);
            return RowOutcome::Skipped(SkipReason::MissingUrl);
        };

        if !is_valid_image(image_url) {
            info!(
                record_id = %record.id,
                "Invalid image URL format or unsupported file type: {}", image_url
            );
            return RowOutcome::Skipped(SkipReason::UnsupportedUrl(image_url.to_string()));
        }

        if fetch_image(self.fetcher.as_ref(), image_url).await.is_none() {
            return RowOutcome::Failed(format!("image at {} could not be fetched", image_url));
        }

        match self.attach(&record.id, image_url).await {
            Ok(()) => {
                info!(record_id = %record.id, "Successfully updated record {}", record.id);
                RowOutcome::Updated
            }
            Err(e) => {
                error!(record_id = %record.id, "Error updating record {}: {}", record.id, e);
                RowOutcome::Failed(e.to_string())
            }
        }
    }

    async fn attach(&self, record_id: &str, image_url: &str) -> Result<()> {
        let attachment = AttachmentRef::new(image_url, attachment_filename(image_url));
        let value = serde_json::to_value(vec![attachment])?;
        self.store
            .update_field(record_id, &self.attachment_field, value)
            .await
    }
}
