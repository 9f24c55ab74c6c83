//! Row and attachment types shared across the pipeline

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One addressable row in the remote table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier
    pub id: String,
    /// Projected fields; empty cells are omitted by the store
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Set a field value
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a non-empty string field
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Reference-style attachment; the store downloads `url` itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub url: String,
    pub filename: String,
}

impl AttachmentRef {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
        }
    }
}

/// Why a row was deliberately left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The URL field is absent or empty
    MissingUrl,
    /// The URL does not end in a supported image extension
    UnsupportedUrl(String),
}

/// Result of processing a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The attachment field was written
    Updated,
    /// Input was missing or invalid
    Skipped(SkipReason),
    /// Fetch or write failed; the row is unmodified
    Failed(String),
}

/// Totals for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows returned by the listing
    pub total: usize,
    /// Size of each batch, in processing order
    pub batch_sizes: Vec<usize>,
    /// Inter-batch pauses taken
    pub pauses: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Number of batches processed
    pub fn batches(&self) -> usize {
        self.batch_sizes.len()
    }

    /// Fold one settled batch into the totals
    pub fn record_batch(&mut self, outcomes: &[RowOutcome]) {
        self.batch_sizes.push(outcomes.len());
        for outcome in outcomes {
            match outcome {
                RowOutcome::Updated => self.updated += 1,
                RowOutcome::Skipped(_) => self.skipped += 1,
                RowOutcome::Failed(_) => self.failed += 1,
            }
        }
    }
}
