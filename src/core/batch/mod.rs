//! Batch orchestration
//!
//! Drives every listed row through the updater in fixed-size batches, pausing
//! between batches to stay under the store's request rate limit.

mod orchestrator;


pub use orchestrator::{BatchOrchestrator, run_from_env};
