//! Get command - print a template's content, base64-encoded.

use anyhow::{Context, Result};
use clap::Args;

use kasten_templates::TemplateStore;

use crate::config::Config;

#[derive(Args)]
pub struct GetArgs {
    /// Name of the template to fetch
    name: String,

    /// Wrap the payload in a JSON envelope
    #[arg(long)]
    json: bool,
}

pub fn execute(args: GetArgs, config: &Config) -> Result<()> {
    let store = TemplateStore::new(config.templates_dir());
    let encoded = store
        .get(&args.name)
        .with_context(|| format!("Failed to fetch template '{}'", args.name))?;

    if args.json {
        println!(
            "{}",
            serde_json::json!({ "template": args.name, "content": encoded })
        );
    } else {
        println!("{encoded}");
    }
    Ok(())
}
