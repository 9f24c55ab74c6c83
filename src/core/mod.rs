//! Core pipeline of the image attacher
//!
//! List rows, validate each URL, fetch the image, write the attachment
//! reference back, in rate-limited batches.

pub mod batch;
pub mod fetcher;
pub mod record;
pub mod store;
pub mod updater;
pub mod validator;

pub use batch::BatchOrchestrator;
pub use fetcher::{FetchBody, FetchResponse, HttpFetch, ReqwestFetcher, fetch_image};
pub use record::{AttachmentRef, Record, RowOutcome, RunSummary, SkipReason};
pub use store::{AirtableClient, RecordStore};
pub use updater::RecordUpdater;
pub use validator::{attachment_filename, is_valid_image};
