//! Add command - store an existing file as a new template.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use kasten_templates::TemplateStore;

use crate::config::Config;

#[derive(Args)]
pub struct AddArgs {
    /// Name to store the template under
    name: String,

    /// File whose content becomes the template
    #[arg(short, long)]
    file: PathBuf,
}

pub fn execute(args: AddArgs, config: &Config) -> Result<()> {
    let content =
        fs::read(&args.file).with_context(|| format!("Failed to read {:?}", args.file))?;

    let store = TemplateStore::new(config.templates_dir());
    store
        .add(&args.name, &content)
        .with_context(|| format!("Failed to add template '{}'", args.name))?;

    println!("✅ Template '{}' added", args.name);
    Ok(())
}
