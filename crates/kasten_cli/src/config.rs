//! CLI configuration resolved from flags and environment.

use std::path::PathBuf;

use anyhow::{Context, Result};

use kasten_templates::EditorCommand;

/// Resolved locations and editor command for one invocation.
///
/// The home directory holds everything durable: `templates/` for template
/// files and `kasten.db` for the artifact store.
#[derive(Debug, Clone)]
pub struct Config {
    home: PathBuf,
    editor: String,
}

impl Config {
    /// Resolve the configuration. Precedence: explicit flag, environment
    /// (`KASTEN_HOME` / `KASTEN_EDITOR` via clap, then `EDITOR`), default
    /// (`~/.kasten`, `vi`).
    pub fn resolve(home: Option<PathBuf>, editor: Option<String>) -> Result<Self> {
        let home = match home {
            Some(home) => home,
            None => std::env::var_os("HOME")
                .map(|h| PathBuf::from(h).join(".kasten"))
                .context("cannot determine home directory; pass --home or set KASTEN_HOME")?,
        };

        let editor = editor
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| "vi".to_string());

        Ok(Self { home, editor })
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.home.join("templates")
    }

    pub fn db_path(&self) -> PathBuf {
        self.home.join("kasten.db")
    }

    pub fn editor(&self) -> EditorCommand {
        EditorCommand::new(&self.editor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_home_and_editor_win() {
        let config =
            Config::resolve(Some(PathBuf::from("/tmp/kb")), Some("nano".to_string())).unwrap();
        assert_eq!(config.templates_dir(), PathBuf::from("/tmp/kb/templates"));
        assert_eq!(config.db_path(), PathBuf::from("/tmp/kb/kasten.db"));
        assert_eq!(config.editor().command_line(), "nano");
    }

    #[test]
    fn test_blank_editor_falls_back() {
        let config =
            Config::resolve(Some(PathBuf::from("/tmp/kb")), Some("   ".to_string())).unwrap();
        // A blank configured editor would split to nothing; fall back instead.
        assert!(!config.editor().command_line().trim().is_empty());
    }
}
