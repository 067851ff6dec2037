//! Apply command - assign a template to all artifacts matching a filter.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kasten_store::{ArtifactFilter, SqliteStore};
use kasten_templates::apply_template;

use crate::config::Config;

#[derive(Args)]
pub struct ApplyArgs {
    /// Template name to assign (not checked against the template store)
    template: String,

    /// Match on artifact title
    #[arg(long)]
    title: Option<String>,

    /// Match on category
    #[arg(long)]
    category: Option<String>,

    /// Match on tags, `;`-separated (e.g. "urgent;work")
    #[arg(long)]
    tags: Option<String>,

    /// Match on author
    #[arg(long)]
    author: Option<String>,

    /// Match on status
    #[arg(long)]
    status: Option<String>,

    /// Use partial (substring) matching instead of exact matching
    #[arg(long)]
    extended_match: bool,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: ApplyArgs, config: &Config) -> Result<()> {
    let filter = build_filter(&args);

    let mut store =
        SqliteStore::open(config.db_path()).context("Failed to open artifact store")?;

    // One transaction around the snapshot read and every update: exactly
    // the matched records are mutated, or none at all.
    let updated: usize = store
        .transaction(|repo| apply_template(repo, &filter, &args.template))
        .with_context(|| format!("Failed to apply template '{}'", args.template))?;

    info!("Template {} assigned to {} artifact(s)", args.template, updated);

    if args.json {
        println!(
            "{}",
            serde_json::json!({ "template": args.template, "updated": updated })
        );
    } else {
        println!(
            "✅ Template '{}' applied to {} artifact(s)",
            args.template, updated
        );
    }
    Ok(())
}

/// Build the artifact filter from the raw arguments. The tag string is
/// split on `;`; an empty or absent string means no tag constraint.
fn build_filter(args: &ApplyArgs) -> ArtifactFilter {
    let mut filter = ArtifactFilter::new();
    if args.extended_match {
        filter = filter.extended();
    }
    if let Some(title) = &args.title {
        filter = filter.with_title(title);
    }
    if let Some(category) = &args.category {
        filter = filter.with_category(category);
    }
    if let Some(tags) = &args.tags {
        filter = filter.with_tags(tags.split(';').filter(|t| !t.is_empty()));
    }
    if let Some(author) = &args.author {
        filter = filter.with_author(author);
    }
    if let Some(status) = &args.status {
        filter = filter.with_status(status);
    }
    filter
}
