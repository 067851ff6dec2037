//! Edit command - open a template in the external editor.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kasten_templates::TemplateStore;

use crate::config::Config;

#[derive(Args)]
pub struct EditArgs {
    /// Name of the template to edit
    name: String,
}

pub fn execute(args: EditArgs, config: &Config) -> Result<()> {
    info!("Editing template: {}", args.name);

    let store = TemplateStore::new(config.templates_dir());
    // Blocks for the duration of the editor session.
    store
        .edit(&args.name, &config.editor())
        .with_context(|| format!("Failed to edit template '{}'", args.name))?;

    Ok(())
}
