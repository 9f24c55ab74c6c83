//! Network utilities
//!
//! This module provides HTTP client construction for the store client and the
//! image fetcher.

pub mod http;

pub use http::{HttpClientConfig, create_client};
