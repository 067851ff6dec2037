//! List command - enumerate stored templates.

use anyhow::{Context, Result};
use clap::Args;

use kasten_templates::TemplateStore;

use crate::config::Config;

#[derive(Args)]
pub struct ListArgs {
    /// Emit the template names as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: ListArgs, config: &Config) -> Result<()> {
    let store = TemplateStore::new(config.templates_dir());
    let mut names = store.list().context("Failed to list templates")?;
    names.sort();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        println!("No templates stored yet. Create one with: kasten new <name>");
        return Ok(());
    }

    for name in names {
        println!("{name}");
    }
    Ok(())
}
