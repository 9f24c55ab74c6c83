//! Error handling for the image attacher
//!
//! This module defines the error type shared by the store client, the image
//! fetcher and the batch orchestrator.

mod helpers;
mod types;

pub use types::{AttacherError, Result};
