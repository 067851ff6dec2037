//! Default content for newly created templates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TemplateResult;

const HEADER: &str = "# This is an example configuration template\n\n\n";

/// One marker rule: a line pattern and the style applied to matching lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub pattern: String,
    pub style: String,
}

/// The configuration a fresh template starts from.
///
/// Template content is opaque to the store itself; this structure only
/// exists to seed `create` with something editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSkeleton {
    pub markers: BTreeMap<String, Marker>,
}

impl Default for TemplateSkeleton {
    fn default() -> Self {
        let mut markers = BTreeMap::new();
        for (name, pattern, style) in [
            ("titles", "^#.*", "blue bold"),
            ("quotes", "^>.*", "magenta"),
            ("code", "^```.*", "cyan"),
            ("warnings", "^!.*", "yellow"),
        ] {
            markers.insert(
                name.to_string(),
                Marker {
                    pattern: pattern.to_string(),
                    style: style.to_string(),
                },
            );
        }
        Self { markers }
    }
}

/// Bytes written into a newly created template: a fixed header comment plus
/// the TOML-serialized default configuration.
pub fn default_skeleton() -> TemplateResult<String> {
    let body = toml::to_string_pretty(&TemplateSkeleton::default())?;
    Ok(format!("{HEADER}{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_starts_with_header_comment() {
        let skeleton = default_skeleton().unwrap();
        assert!(skeleton.starts_with("# This is an example configuration template"));
    }

    #[test]
    fn test_skeleton_body_parses_back() {
        let skeleton = default_skeleton().unwrap();
        let parsed: TemplateSkeleton = toml::from_str(&skeleton).unwrap();
        assert_eq!(parsed, TemplateSkeleton::default());
    }
}
