//! formflow server binary
//!
//! Serves the form frontend's static resources from the configured
//! document root.

use anyhow::Result;
use formflow::{config::FormConfig, server};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = FormConfig::load()?;

    if let Err(err) = server::run(&config).await {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}
