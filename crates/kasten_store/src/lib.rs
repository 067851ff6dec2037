//! # kasten_store
//!
//! SQLite-backed artifact storage for kasten.
//!
//! An artifact is a knowledge-base record carrying classification metadata
//! (title, category, tags, author, status) and the name of its assigned
//! template. This crate owns the relational store for those records and the
//! query contract other crates build on:
//!
//! - [`ArtifactRepository`] — snapshot reads by filter, identity-keyed
//!   updates, inserts
//! - [`SqliteStore`] — the durable implementation, plus a transactional
//!   view for callers that need read+update atomicity
//!
//! ## Example
//!
//! ```rust,no_run
//! use kasten_store::{ArtifactFilter, ArtifactRepository, NewArtifact, SqliteStore};
//!
//! let store = SqliteStore::open("kasten.db").unwrap();
//! store
//!     .insert(&NewArtifact::new("meeting-notes", "notes").with_tags(["work"]))
//!     .unwrap();
//!
//! let filter = ArtifactFilter::new().with_category("notes");
//! let matches = store.find_by_filter(&filter).unwrap();
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::{StoreError, StoreResult};
pub use models::{Artifact, ArtifactFilter, NewArtifact};
pub use repository::ArtifactRepository;
pub use sqlite::{SqliteStore, TxStore};
