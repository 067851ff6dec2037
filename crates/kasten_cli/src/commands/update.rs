//! Update command - replace an existing template's content.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use kasten_templates::TemplateStore;

use crate::config::Config;

#[derive(Args)]
pub struct UpdateArgs {
    /// Name of the template to replace
    name: String,

    /// File whose content becomes the new template content
    #[arg(short, long)]
    file: PathBuf,
}

pub fn execute(args: UpdateArgs, config: &Config) -> Result<()> {
    let content =
        fs::read(&args.file).with_context(|| format!("Failed to read {:?}", args.file))?;

    let store = TemplateStore::new(config.templates_dir());
    store
        .update(&args.name, &content)
        .with_context(|| format!("Failed to update template '{}'", args.name))?;

    println!("✅ Template '{}' updated", args.name);
    Ok(())
}
