//! CLI command definitions.
//!
//! This module defines the command structure for the kasten CLI. Each
//! subcommand maps to one template-store or bulk-apply operation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod add;
pub mod apply;
pub mod delete;
pub mod edit;
pub mod get;
pub mod list;
pub mod new;
pub mod update;

/// kasten - a personal knowledge-base organizer
#[derive(Parser)]
#[command(name = "kasten")]
#[command(version, about = "kasten - template management for a personal knowledge base")]
#[command(long_about = r#"
kasten manages named templates - reusable metadata/content presets stored
as plain files - and applies them to the artifact records of a personal
knowledge base.

WORKFLOWS:
  list      → Enumerate stored templates
  new       → Create a template from the default skeleton and open the editor
  add       → Store an existing file as a new template
  update    → Replace a template's content
  delete    → Remove a template
  get       → Print a template's content, base64-encoded
  edit      → Open a template in the editor
  apply     → Assign a template to every artifact matching a filter

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Not found
  4 - Already exists
  5 - Artifact store error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Knowledge-base home directory (holds templates/ and kasten.db)
    #[arg(long, global = true, env = "KASTEN_HOME")]
    pub home: Option<PathBuf>,

    /// Editor command used by `new` and `edit` (falls back to $EDITOR, then vi)
    #[arg(long, global = true, env = "KASTEN_EDITOR")]
    pub editor: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate stored templates
    List(list::ListArgs),

    /// Create a new template from the default skeleton
    New(new::NewArgs),

    /// Store an existing file as a new template
    Add(add::AddArgs),

    /// Replace an existing template's content
    Update(update::UpdateArgs),

    /// Remove a template
    Delete(delete::DeleteArgs),

    /// Print a template's content, base64-encoded
    Get(get::GetArgs),

    /// Open a template in the external editor
    Edit(edit::EditArgs),

    /// Assign a template to all artifacts matching a filter
    Apply(apply::ApplyArgs),
}
