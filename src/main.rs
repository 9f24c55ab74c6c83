//! image-attacher - attach images referenced by URL to Airtable rows
//!
//! Reads `AIRTABLE_ACCESS_TOKEN`, `AIRTABLE_BASE_ID` and `AIRTABLE_TABLE_NAME`
//! from the environment or a `.env` file. Takes no arguments.

use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(false)
        .init();

    info!(
        "image-attacher {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    match image_attacher::run_from_env().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
