//! New command - create a template from the default skeleton.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kasten_templates::TemplateStore;

use crate::config::Config;

#[derive(Args)]
pub struct NewArgs {
    /// Name of the template to create
    name: String,
}

pub fn execute(args: NewArgs, config: &Config) -> Result<()> {
    info!("Creating template: {}", args.name);

    let store = TemplateStore::new(config.templates_dir());
    // Blocks for the duration of the editor session.
    store
        .create(&args.name, &config.editor())
        .with_context(|| format!("Failed to create template '{}'", args.name))?;

    println!("✅ Template '{}' created", args.name);
    Ok(())
}
