//! Artifact record and filter definitions.

use serde::{Deserialize, Serialize};

/// A knowledge-base record with classification metadata and an assigned
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Store-assigned identifier.
    pub id: i64,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub status: String,
    /// Name of the assigned template, if any. May reference a template
    /// that no longer exists; the store does not enforce the link.
    pub template: Option<String>,
}

impl Artifact {
    /// Copy of this artifact, identical in every field except the template
    /// assignment.
    pub fn with_template(&self, template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            ..self.clone()
        }
    }
}

/// Field values for an artifact that has not been stored yet; the store
/// assigns the id on insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewArtifact {
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub status: String,
    pub template: Option<String>,
}

impl NewArtifact {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Ad-hoc query over artifact attributes.
///
/// Unset fields impose no constraint; set fields are ANDed together. The
/// `strict` flag selects exact matching; when cleared, scalar fields match
/// on substrings and tags match partially (see [`ArtifactFilter::matches_tags`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFilter {
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub status: Option<String>,
    pub strict: bool,
}

impl Default for ArtifactFilter {
    fn default() -> Self {
        Self {
            title: None,
            category: None,
            tags: None,
            author: None,
            status: None,
            strict: true,
        }
    }
}

impl ArtifactFilter {
    /// An unconstrained, strict filter. An unconstrained filter matches
    /// every artifact in the store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Constrain on tags. An empty list is treated as no constraint.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        self.tags = if tags.is_empty() { None } else { Some(tags) };
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Switch to extended (partial) matching.
    pub fn extended(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Whether no predicate field is set.
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.author.is_none()
            && self.status.is_none()
    }

    /// Evaluate the tag predicate against an artifact's tag list.
    ///
    /// Strict: the artifact's tag set must equal the filter's tag set.
    /// Extended: at least one filter token must occur as a substring of at
    /// least one artifact tag.
    pub fn matches_tags(&self, artifact_tags: &[String]) -> bool {
        let Some(wanted) = &self.tags else {
            return true;
        };

        if self.strict {
            let mut have: Vec<&str> = artifact_tags.iter().map(String::as_str).collect();
            let mut want: Vec<&str> = wanted.iter().map(String::as_str).collect();
            have.sort_unstable();
            have.dedup();
            want.sort_unstable();
            want.dedup();
            have == want
        } else {
            wanted
                .iter()
                .any(|token| artifact_tags.iter().any(|tag| tag.contains(token.as_str())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_unconstrained_filter_matches_any_tags() {
        let filter = ArtifactFilter::new();
        assert!(filter.matches_tags(&tags(&["urgent", "work"])));
        assert!(filter.matches_tags(&[]));
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_strict_tags_require_exact_set() {
        let filter = ArtifactFilter::new().with_tags(["urgent"]);
        assert!(filter.matches_tags(&tags(&["urgent"])));
        assert!(!filter.matches_tags(&tags(&["urgent", "work"])));
        assert!(!filter.matches_tags(&[]));
    }

    #[test]
    fn test_strict_tags_ignore_order() {
        let filter = ArtifactFilter::new().with_tags(["b", "a"]);
        assert!(filter.matches_tags(&tags(&["a", "b"])));
    }

    #[test]
    fn test_extended_tags_match_any_substring() {
        let filter = ArtifactFilter::new().with_tags(["urg", "missing"]).extended();
        assert!(filter.matches_tags(&tags(&["urgent", "work"])));

        let filter = ArtifactFilter::new().with_tags(["nope"]).extended();
        assert!(!filter.matches_tags(&tags(&["urgent", "work"])));
    }

    #[test]
    fn test_empty_tag_list_is_no_constraint() {
        let filter = ArtifactFilter::new().with_tags(Vec::<String>::new());
        assert!(filter.tags.is_none());
        assert!(filter.matches_tags(&tags(&["anything"])));
    }

    #[test]
    fn test_with_template_replaces_only_assignment() {
        let artifact = Artifact {
            id: 7,
            title: "notes".to_string(),
            category: "work".to_string(),
            tags: tags(&["urgent"]),
            author: "gnc".to_string(),
            status: "open".to_string(),
            template: None,
        };

        let reassigned = artifact.with_template("todo");
        assert_eq!(reassigned.template.as_deref(), Some("todo"));
        assert_eq!(reassigned.id, artifact.id);
        assert_eq!(reassigned.title, artifact.title);
        assert_eq!(reassigned.tags, artifact.tags);
    }
}
