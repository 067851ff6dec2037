//! Error types for template operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(String),

    #[error("template already exists at path: {0}")]
    AlreadyExists(PathBuf),

    #[error("invalid template name: {0:?}")]
    InvalidName(String),

    #[error("invalid editor command: {0:?}")]
    InvalidEditor(String),

    #[error("failed to launch editor {command:?}: {source}")]
    EditorLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}
