//! # image-attacher
//!
//! One-shot maintenance job for Airtable: for every row of a table, read the
//! `imageUrl` field, check that it points at a supported image, confirm the
//! image downloads with an `image/*` content type, and set the `Image`
//! attachment field to a reference to that URL.
//!
//! Rows are processed five at a time with a one-second pause between batches
//! to stay under the API rate limit.
//!
//! ```rust,no_run
//! use image_attacher::{AttacherConfig, BatchOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AttacherConfig::from_env()?;
//!     let summary = BatchOrchestrator::from_config(&config)?.process_all().await?;
//!     println!("updated {} of {} rows", summary.updated, summary.total);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

pub use config::AttacherConfig;
pub use crate::core::batch::run_from_env;
pub use crate::core::{BatchOrchestrator, Record, RowOutcome, RunSummary, is_valid_image};
pub use utils::error::{AttacherError, Result};
