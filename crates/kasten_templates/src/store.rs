//! Template file lifecycle.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tempfile::NamedTempFile;
use tracing::info;
use walkdir::WalkDir;

use crate::editor::EditorCommand;
use crate::error::{TemplateError, TemplateResult};
use crate::skeleton;

/// Store for named template files under a root directory.
///
/// A template's name doubles as its file name, so names are validated
/// against anything that could escape the root. Content is opaque bytes;
/// mutation is full replacement only.
pub struct TemplateStore {
    templates_path: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at `templates_path`. The directory is created
    /// lazily on the first write.
    pub fn new(templates_path: impl Into<PathBuf>) -> Self {
        Self {
            templates_path: templates_path.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.templates_path
    }

    /// Names of the stored templates; order unspecified.
    pub fn list(&self) -> TemplateResult<Vec<String>> {
        if !self.templates_path.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.templates_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    pub fn exists(&self, name: &str) -> TemplateResult<bool> {
        Ok(self.template_path(name)?.is_file())
    }

    /// Create a new template from the default skeleton and hand it to the
    /// editor for interactive completion. Blocks until the editor exits.
    pub fn create(&self, name: &str, editor: &EditorCommand) -> TemplateResult<()> {
        let path = self.template_path(name)?;
        if path.is_file() {
            return Err(TemplateError::AlreadyExists(path));
        }

        fs::create_dir_all(&self.templates_path)?;
        fs::write(&path, skeleton::default_skeleton()?)?;
        info!("Created template {} from skeleton", name);

        editor.open(&path)
    }

    /// Persist `content` verbatim under a new name.
    pub fn add(&self, name: &str, content: &[u8]) -> TemplateResult<()> {
        let path = self.template_path(name)?;
        if path.is_file() {
            return Err(TemplateError::AlreadyExists(path));
        }

        fs::create_dir_all(&self.templates_path)?;
        fs::write(&path, content)?;
        info!("Added template {} ({} bytes)", name, content.len());
        Ok(())
    }

    /// Replace an existing template's content. The replacement is written
    /// to a sibling temp file and renamed over the original, so readers
    /// never observe a partial write.
    pub fn update(&self, name: &str, content: &[u8]) -> TemplateResult<()> {
        let path = self.template_path(name)?;
        if !path.is_file() {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        let mut staged = NamedTempFile::new_in(&self.templates_path)?;
        staged.write_all(content)?;
        staged
            .persist(&path)
            .map_err(|e| TemplateError::Io(e.error))?;
        info!("Updated template {} ({} bytes)", name, content.len());
        Ok(())
    }

    pub fn delete(&self, name: &str) -> TemplateResult<()> {
        let path = self.template_path(name)?;
        if !path.is_file() {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        fs::remove_file(&path)?;
        info!("Deleted template {}", name);
        Ok(())
    }

    /// Raw template bytes.
    pub fn read(&self, name: &str) -> TemplateResult<Vec<u8>> {
        let path = self.template_path(name)?;
        if !path.is_file() {
            return Err(TemplateError::NotFound(name.to_string()));
        }
        Ok(fs::read(&path)?)
    }

    /// Template content base64-encoded for text-safe transport.
    pub fn get(&self, name: &str) -> TemplateResult<String> {
        Ok(BASE64.encode(self.read(name)?))
    }

    /// Open an existing template in the editor. Blocks until it exits.
    pub fn edit(&self, name: &str, editor: &EditorCommand) -> TemplateResult<()> {
        let path = self.template_path(name)?;
        if !path.is_file() {
            return Err(TemplateError::NotFound(name.to_string()));
        }
        editor.open(&path)
    }

    fn template_path(&self, name: &str) -> TemplateResult<PathBuf> {
        validate_name(name)?;
        Ok(self.templates_path.join(name))
    }
}

/// Template names double as file names; reject anything that could resolve
/// outside the templates directory.
fn validate_name(name: &str) -> TemplateResult<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if invalid {
        return Err(TemplateError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_without_directory_is_empty() {
        let temp = tempdir().unwrap();
        let store = TemplateStore::new(temp.path().join("templates"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_name_validation_rejects_traversal() {
        let temp = tempdir().unwrap();
        let store = TemplateStore::new(temp.path());

        for bad in ["", ".", "..", "a/b", "a\\b", "nul\0byte"] {
            let err = store.add(bad, b"x").unwrap_err();
            assert!(matches!(err, TemplateError::InvalidName(_)), "{bad:?}");
        }
    }
}
