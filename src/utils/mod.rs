//! Utility modules for the image attacher
//!
//! Error handling and HTTP client construction shared by the pipeline.

pub mod error;
pub mod net;

pub use error::{AttacherError, Result};
