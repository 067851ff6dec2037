//! Bulk template assignment.

use kasten_store::{ArtifactFilter, ArtifactRepository, StoreError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from a bulk template assignment.
#[derive(Error, Debug)]
pub enum ApplyError {
    /// The snapshot read failed; no artifact was updated.
    #[error("artifact query failed: {0}")]
    Store(#[from] StoreError),

    /// An update failed mid-batch; the remaining matches were skipped.
    #[error("bulk apply aborted after {applied} update(s): {source}")]
    Aborted {
        applied: usize,
        #[source]
        source: StoreError,
    },
}

/// Assign `template` to every artifact matching `filter`, returning the
/// exact number of update calls issued.
///
/// Each matched artifact is rewritten identical in all fields except the
/// template assignment, keyed by its id. The target name is not checked
/// against the template store; assigning a name with no backing template
/// file is allowed. A failed update aborts the remaining batch and reports
/// how many updates went through first.
///
/// The read and the updates are only as atomic as `repo` makes them; run
/// this inside [`SqliteStore::transaction`](kasten_store::SqliteStore::transaction)
/// when exactly the snapshotted records must be mutated or none at all.
pub fn apply_template<R: ArtifactRepository>(
    repo: &R,
    filter: &ArtifactFilter,
    template: &str,
) -> Result<usize, ApplyError> {
    let matches = repo.find_by_filter(filter)?;
    debug!("Bulk apply of {:?}: {} artifact(s) match", template, matches.len());

    let mut applied = 0;
    for artifact in matches {
        repo.update_by_id(artifact.id, &artifact.with_template(template))
            .map_err(|source| ApplyError::Aborted { applied, source })?;
        applied += 1;
    }

    info!("Assigned template {:?} to {} artifact(s)", template, applied);
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasten_store::{Artifact, NewArtifact, StoreResult};
    use mockall::mock;
    use mockall::Sequence;

    mock! {
        Repo {}

        impl ArtifactRepository for Repo {
            fn find_by_filter(&self, filter: &ArtifactFilter) -> StoreResult<Vec<Artifact>>;
            fn update_by_id(&self, id: i64, artifact: &Artifact) -> StoreResult<()>;
            fn insert(&self, artifact: &NewArtifact) -> StoreResult<i64>;
        }
    }

    fn artifact(id: i64, tags: &[&str]) -> Artifact {
        Artifact {
            id,
            title: format!("artifact-{id}"),
            category: "notes".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: "gnc".to_string(),
            status: "open".to_string(),
            template: None,
        }
    }

    #[test]
    fn test_count_equals_updates_issued() {
        let matches = vec![artifact(1, &["urgent"]), artifact(2, &["urgent", "work"])];

        let mut repo = MockRepo::new();
        repo.expect_find_by_filter()
            .times(1)
            .returning(move |_| Ok(matches.clone()));
        repo.expect_update_by_id()
            .withf(|id, updated| {
                updated.id == *id && updated.template.as_deref() == Some("todo")
            })
            .times(2)
            .returning(|_, _| Ok(()));

        let count = apply_template(&repo, &ArtifactFilter::new(), "todo").unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_rewrite_preserves_every_other_field() {
        let original = artifact(5, &["urgent"]);
        let expected = original.with_template("daily");

        let mut repo = MockRepo::new();
        repo.expect_find_by_filter()
            .returning(move |_| Ok(vec![original.clone()]));
        repo.expect_update_by_id()
            .withf(move |id, updated| *id == 5 && *updated == expected)
            .times(1)
            .returning(|_, _| Ok(()));

        apply_template(&repo, &ArtifactFilter::new(), "daily").unwrap();
    }

    #[test]
    fn test_no_matches_issues_no_updates() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_filter().returning(|_| Ok(Vec::new()));
        repo.expect_update_by_id().never();

        let count = apply_template(&repo, &ArtifactFilter::new().with_title("none"), "todo")
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_query_failure_carries_no_count() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_filter().returning(|_| {
            Err(StoreError::Unavailable(
                rusqlite_unavailable(),
            ))
        });
        repo.expect_update_by_id().never();

        let err = apply_template(&repo, &ArtifactFilter::new(), "todo").unwrap_err();
        assert!(matches!(err, ApplyError::Store(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_midbatch_failure_aborts_and_reports_progress() {
        let matches = vec![
            artifact(1, &[]),
            artifact(2, &[]),
            artifact(3, &[]),
        ];

        let mut repo = MockRepo::new();
        repo.expect_find_by_filter()
            .returning(move |_| Ok(matches.clone()));

        let mut seq = Sequence::new();
        repo.expect_update_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        repo.expect_update_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(StoreError::ArtifactNotFound(2)));

        let err = apply_template(&repo, &ArtifactFilter::new(), "todo").unwrap_err();
        match err {
            ApplyError::Aborted { applied, source } => {
                assert_eq!(applied, 1);
                assert!(matches!(source, StoreError::ArtifactNotFound(2)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // A connection-level rusqlite error for simulating an unreachable store.
    fn rusqlite_unavailable() -> rusqlite::Error {
        rusqlite::Error::InvalidPath(std::path::PathBuf::from("/nonexistent/kasten.db"))
    }
}
