//! Integration tests for the SQLite artifact store.

use kasten_store::{ArtifactFilter, ArtifactRepository, NewArtifact, SqliteStore};
use tempfile::tempdir;

#[test]
fn test_open_creates_database_file() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("kasten.db");

    let store = SqliteStore::open(&db_path).unwrap();
    assert!(db_path.exists());
    assert_eq!(store.path(), db_path);
}

#[test]
fn test_open_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("nested").join("deeper").join("kasten.db");

    SqliteStore::open(&db_path).unwrap();
    assert!(db_path.exists());
}

#[test]
fn test_artifacts_survive_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("kasten.db");

    {
        let store = SqliteStore::open(&db_path).unwrap();
        store
            .insert(
                &NewArtifact::new("persisted", "notes")
                    .with_tags(["keep"])
                    .with_author("gnc")
                    .with_status("open")
                    .with_template("daily"),
            )
            .unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    let all = store.find_by_filter(&ArtifactFilter::new()).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "persisted");
    assert_eq!(all[0].tags, vec!["keep"]);
    assert_eq!(all[0].template.as_deref(), Some("daily"));
}

#[test]
fn test_insert_assigns_increasing_ids() {
    let dir = tempdir().unwrap();
    let store = SqliteStore::open(dir.path().join("kasten.db")).unwrap();

    let first = store.insert(&NewArtifact::new("a", "c")).unwrap();
    let second = store.insert(&NewArtifact::new("b", "c")).unwrap();
    assert!(second > first);
}
