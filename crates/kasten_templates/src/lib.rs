//! # kasten_templates
//!
//! Template management for kasten.
//!
//! A template is a named, opaque content blob stored as a single file under
//! a configured templates directory. This crate handles the template
//! lifecycle and the bulk assignment of a template to artifacts:
//!
//! - [`TemplateStore`] — list/create/add/update/delete/get/edit of
//!   template files
//! - [`EditorCommand`] — the blocking external-editor handoff used by
//!   `create` and `edit`
//! - [`apply_template`] — assign one template to every artifact matching a
//!   filter, reporting the exact count updated
//!
//! ## Example
//!
//! ```rust,no_run
//! use kasten_store::{ArtifactFilter, SqliteStore};
//! use kasten_templates::{apply_template, TemplateStore};
//!
//! let templates = TemplateStore::new("templates");
//! templates.add("todo", b"# todo preset\n").unwrap();
//!
//! let mut store = SqliteStore::open("kasten.db").unwrap();
//! let filter = ArtifactFilter::new().with_tags(["urgent"]);
//! let updated: usize = store
//!     .transaction(|repo| apply_template(repo, &filter, "todo"))
//!     .unwrap();
//! println!("updated {updated} artifact(s)");
//! ```

pub mod apply;
pub mod editor;
pub mod error;
pub mod skeleton;
pub mod store;

pub use apply::{apply_template, ApplyError};
pub use editor::EditorCommand;
pub use error::{TemplateError, TemplateResult};
pub use skeleton::{default_skeleton, Marker, TemplateSkeleton};
pub use store::TemplateStore;
