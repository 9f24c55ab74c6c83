//! Fire-batch, await-all, pause, repeat

use crate::config::AttacherConfig;
use crate::core::fetcher::{HttpFetch, ReqwestFetcher};
use crate::core::record::{Record, RowOutcome, RunSummary};
use crate::core::store::{AirtableClient, RecordStore};
use crate::core::updater::RecordUpdater;
use crate::utils::error::Result;
use crate::utils::net::{HttpClientConfig, create_client};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{error, info};

/// Lists rows once and processes them batch by batch
pub struct BatchOrchestrator {
    store: Arc<dyn RecordStore>,
    updater: Arc<RecordUpdater>,
    fields: Vec<String>,
    batch_size: usize,
    batch_pause: Duration,
}

impl BatchOrchestrator {
    /// Create an orchestrator over explicit collaborators
    pub fn new(
        config: &AttacherConfig,
        store: Arc<dyn RecordStore>,
        fetcher: Arc<dyn HttpFetch>,
    ) -> Self {
        let updater = RecordUpdater::new(config, Arc::clone(&store), fetcher);

        Self {
            store,
            updater: Arc::new(updater),
            fields: vec![config.url_field.clone(), config.attachment_field.clone()],
            batch_size: config.batch_size.max(1),
            batch_pause: config.batch_pause,
        }
    }

    /// Create an orchestrator talking to Airtable over one shared HTTP client
    pub fn from_config(config: &AttacherConfig) -> Result<Self> {
        let client = create_client(&HttpClientConfig::default().with_timeout(config.http_timeout))?;
        let store = Arc::new(AirtableClient::new(config, client.clone()));
        let fetcher = Arc::new(ReqwestFetcher::new(client));
        Ok(Self::new(config, store, fetcher))
    }

    /// Process every row; only a listing failure is returned as an error
    pub async fn process_all(&self) -> Result<RunSummary> {
        let records = match self.store.list_records(&self.fields).await {
            Ok(records) => records,
            Err(e) => {
                error!("Error processing records: {}", e);
                return Err(e);
            }
        };

        info!("Found {} records to process", records.len());

        let total_batches = records.len().div_ceil(self.batch_size);
        let mut summary = RunSummary::new(records.len());
        let mut remaining = records.into_iter();

        for index in 0..total_batches {
            let batch: Vec<Record> = remaining.by_ref().take(self.batch_size).collect();
            info!(
                batch = index + 1,
                total = total_batches,
                "Processing batch {} of {}",
                index + 1,
                total_batches
            );

            let outcomes = self.run_batch(batch).await;
            summary.record_batch(&outcomes);

            if index + 1 < total_batches {
                info!("Waiting for rate limit...");
                tokio::time::sleep(self.batch_pause).await;
                summary.pauses += 1;
            }
        }

        info!(
            updated = summary.updated,
            skipped = summary.skipped,
            failed = summary.failed,
            "Finished processing all records"
        );
        Ok(summary)
    }

    /// Run every row of a batch concurrently and wait for all to settle
    async fn run_batch(&self, batch: Vec<Record>) -> Vec<RowOutcome> {
        let mut tasks = JoinSet::new();
        for record in batch {
            let updater = Arc::clone(&self.updater);
            tasks.spawn(async move { updater.update_record(&record).await });
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    error!("Row task did not complete: {}", e);
                    outcomes.push(RowOutcome::Failed(e.to_string()));
                }
            }
        }
        outcomes
    }
}

/// Load configuration from the environment and process the whole table
pub async fn run_from_env() -> Result<RunSummary> {
    let config = AttacherConfig::from_env()?;
    info!(
        base_id = %config.base_id,
        table = %config.table_name,
        "Attaching images from '{}' into '{}'",
        config.url_field,
        config.attachment_field
    );

    BatchOrchestrator::from_config(&config)?.process_all().await
}
