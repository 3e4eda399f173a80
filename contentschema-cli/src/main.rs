//! contentschema: reconcile a declared content model against Contentful.
//!
//! Reads the desired content types from a JSON file, compares them with the
//! target space/environment and issues only the writes needed to match.
//!
//! Usage:
//!   contentschema --schema model.json --space <id> --token <cma token>
//!
//! Ctrl-C stops the run before its next remote call.

use anyhow::{Context, Result};
use clap::Parser;
use contentschema_cli::{Args, load_schemas, render_report};
use contentschema_sync::{CancellationSignal, ContentfulClient, SchemaManager};
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let schemas = load_schemas(&args.schema)?;
    info!(
        "Loaded {} content schemas from {:?}",
        schemas.len(),
        args.schema
    );

    let config = args.contentful_config();
    info!(
        "Target: space {} / environment {}",
        config.space_id, config.environment_id
    );
    let client = ContentfulClient::new(config).context("Failed to create Contentful client")?;

    let cancel = CancellationSignal::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping before the next remote call");
            on_interrupt.cancel();
        }
    });

    let manager = SchemaManager::new(Arc::new(client));
    let report = manager
        .update_schema_with_cancel(&schemas, &cancel)
        .await
        .context("Schema reconciliation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}
