//! Argument handling, schema loading and report rendering for the
//! `contentschema` binary.

use anyhow::{Context, Result, bail};
use clap::Parser;
use contentschema_model::ContentSchema;
use contentschema_sync::{ContentfulConfig, Outcome, SyncReport};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(name = "contentschema")]
#[command(about = "Reconcile a declared content model against a Contentful space")]
pub struct Args {
    /// JSON file holding an array of content schemas
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Space id
    #[arg(long, env = "CONTENTFUL_SPACE_ID")]
    pub space: String,

    /// Environment id
    #[arg(long, env = "CONTENTFUL_ENVIRONMENT", default_value = "master")]
    pub environment: String,

    /// Content management token
    #[arg(long, env = "CONTENTFUL_MANAGEMENT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Management API base URL
    #[arg(long, env = "CONTENTFUL_API_URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "60")]
    pub timeout: u64,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn contentful_config(&self) -> ContentfulConfig {
        let defaults = ContentfulConfig::default();
        ContentfulConfig {
            api_base_url: self.api_url.clone().unwrap_or(defaults.api_base_url),
            space_id: self.space.clone(),
            environment_id: self.environment.clone(),
            management_token: self.token.clone(),
            timeout_secs: self.timeout,
            ..defaults
        }
    }
}

/// Reads the desired schema set from a JSON array.
///
/// Rejects duplicate content type ids, since each desired entry must
/// reconcile a distinct remote content type.
pub fn load_schemas(path: &Path) -> Result<Vec<ContentSchema>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {}", path.display()))?;
    let schemas: Vec<ContentSchema> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse schema file {}", path.display()))?;

    let mut seen = HashSet::new();
    for schema in &schemas {
        if !seen.insert(schema.id()) {
            bail!("Duplicate content type id in schema file: {}", schema.id());
        }
    }

    Ok(schemas)
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Created => "created",
        Outcome::Updated => "updated",
        Outcome::Unchanged => "unchanged",
    }
}

/// Human-readable summary, one line per entry plus a totals line.
pub fn render_report(report: &SyncReport) -> String {
    let mut out = String::new();
    for entry in &report.entries {
        let _ = writeln!(
            out,
            "  {:<24} content type: {:<10} editor interface: {}",
            entry.id,
            outcome_label(entry.content_type),
            outcome_label(entry.editor_interface)
        );
    }

    if report.is_noop() {
        let _ = writeln!(out, "Schema up to date ({} content types)", report.entries.len());
    } else {
        let _ = writeln!(
            out,
            "{} created, {} updated, {} editor interfaces updated",
            report.created(),
            report.updated(),
            report.editor_interfaces_updated()
        );
    }
    out
}
