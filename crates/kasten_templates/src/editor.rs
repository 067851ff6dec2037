//! External editor handoff.

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{TemplateError, TemplateResult};

/// Configured editor command line, e.g. `vim` or `code --wait`.
///
/// The command is split on shell-word boundaries and receives the file to
/// edit as its final argument. [`EditorCommand::open`] blocks until the
/// editor exits and returns control on every exit path, including a failed
/// launch.
#[derive(Debug, Clone)]
pub struct EditorCommand {
    raw: String,
}

impl EditorCommand {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn command_line(&self) -> &str {
        &self.raw
    }

    /// Open `file` in the editor and wait for the session to end.
    ///
    /// The exit status is not treated as a failure; a non-zero exit is
    /// logged as a warning.
    pub fn open(&self, file: &Path) -> TemplateResult<()> {
        let words = shlex::split(&self.raw)
            .filter(|words| !words.is_empty())
            .ok_or_else(|| TemplateError::InvalidEditor(self.raw.clone()))?;
        let (program, args) = words
            .split_first()
            .ok_or_else(|| TemplateError::InvalidEditor(self.raw.clone()))?;

        debug!("Handing {:?} to editor: {}", file, self.raw);
        let status = Command::new(program)
            .args(args)
            .arg(file)
            .status()
            .map_err(|source| TemplateError::EditorLaunch {
                command: self.raw.clone(),
                source,
            })?;

        if !status.success() {
            warn!("Editor {:?} exited with {}", self.raw, status);
        }
        Ok(())
    }
}
