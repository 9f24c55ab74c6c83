//! End-to-end tests for image-attacher
//!
//! These tests talk to a real Airtable base and never write to it.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - AIRTABLE_ACCESS_TOKEN
//! - AIRTABLE_BASE_ID
//! - AIRTABLE_TABLE_NAME
