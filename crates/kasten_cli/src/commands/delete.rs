//! Delete command - remove a template.

use anyhow::{Context, Result};
use clap::Args;

use kasten_templates::TemplateStore;

use crate::config::Config;

#[derive(Args)]
pub struct DeleteArgs {
    /// Name of the template to remove
    name: String,
}

pub fn execute(args: DeleteArgs, config: &Config) -> Result<()> {
    let store = TemplateStore::new(config.templates_dir());
    store
        .delete(&args.name)
        .with_context(|| format!("Failed to delete template '{}'", args.name))?;

    println!("✅ Template '{}' deleted", args.name);
    Ok(())
}
