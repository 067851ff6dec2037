//! SQLite-backed artifact store.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::models::{Artifact, ArtifactFilter, NewArtifact};
use crate::repository::ArtifactRepository;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS artifacts (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '',
    author TEXT NOT NULL,
    status TEXT NOT NULL,
    template TEXT
);
CREATE INDEX IF NOT EXISTS idx_artifacts_title ON artifacts(title);
CREATE INDEX IF NOT EXISTS idx_artifacts_category ON artifacts(category);
"#;

/// Durable artifact store over a single SQLite database file.
pub struct SqliteStore {
    db_path: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the artifact database at `path`.
    ///
    /// A connection that cannot be established at all is reported as
    /// [`StoreError::Unavailable`].
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db_path = path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&db_path).map_err(StoreError::Unavailable)?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(StoreError::Unavailable)?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(StoreError::Unavailable)?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(StoreError::Unavailable)?;

        let store = Self { db_path, conn };
        store.migrate()?;
        info!("Opened artifact store at {:?}", store.db_path);
        Ok(store)
    }

    /// In-memory store; used by tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Unavailable)?;
        let store = Self {
            db_path: PathBuf::from(":memory:"),
            conn,
        };
        store.migrate()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn migrate(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Run `f` against a transactional view of the store.
    ///
    /// The view implements [`ArtifactRepository`], so a snapshot read and
    /// the updates derived from it commit (or roll back) as one unit. The
    /// transaction commits when `f` returns `Ok` and rolls back on `Err`
    /// or panic.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&TxStore<'_>) -> Result<T, E>,
    {
        let tx = self.conn.transaction().map_err(StoreError::from)?;
        let view = TxStore { conn: &*tx };
        let out = f(&view)?;
        tx.commit().map_err(StoreError::from)?;
        Ok(out)
    }
}

impl ArtifactRepository for SqliteStore {
    fn find_by_filter(&self, filter: &ArtifactFilter) -> StoreResult<Vec<Artifact>> {
        query_by_filter(&self.conn, filter)
    }

    fn update_by_id(&self, id: i64, artifact: &Artifact) -> StoreResult<()> {
        update_by_id(&self.conn, id, artifact)
    }

    fn insert(&self, artifact: &NewArtifact) -> StoreResult<i64> {
        insert(&self.conn, artifact)
    }
}

/// Transactional view handed to [`SqliteStore::transaction`] closures.
pub struct TxStore<'a> {
    conn: &'a Connection,
}

impl ArtifactRepository for TxStore<'_> {
    fn find_by_filter(&self, filter: &ArtifactFilter) -> StoreResult<Vec<Artifact>> {
        query_by_filter(self.conn, filter)
    }

    fn update_by_id(&self, id: i64, artifact: &Artifact) -> StoreResult<()> {
        update_by_id(self.conn, id, artifact)
    }

    fn insert(&self, artifact: &NewArtifact) -> StoreResult<i64> {
        insert(self.conn, artifact)
    }
}

/// Tags are persisted as a single `;`-joined TEXT column.
fn join_tags(tags: &[String]) -> String {
    tags.join(";")
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(';')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn query_by_filter(conn: &Connection, filter: &ArtifactFilter) -> StoreResult<Vec<Artifact>> {
    let mut conditions: Vec<String> = Vec::new();
    let mut bound: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    let scalars = [
        ("title", &filter.title),
        ("category", &filter.category),
        ("author", &filter.author),
        ("status", &filter.status),
    ];
    for (column, value) in scalars {
        if let Some(value) = value {
            if filter.strict {
                conditions.push(format!("{column} = ?"));
                bound.push(Box::new(value.clone()));
            } else {
                conditions.push(format!("{column} LIKE ?"));
                bound.push(Box::new(format!("%{value}%")));
            }
        }
    }

    let mut sql = String::from(
        "SELECT id, title, category, tags, author, status, template FROM artifacts",
    );
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY id");

    debug!("Artifact query: {}", sql);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(bound.iter()), |row| {
        Ok(Artifact {
            id: row.get(0)?,
            title: row.get(1)?,
            category: row.get(2)?,
            tags: split_tags(&row.get::<_, String>(3)?),
            author: row.get(4)?,
            status: row.get(5)?,
            template: row.get(6)?,
        })
    })?;

    // The tag predicate works on the decoded tag list, so it is applied
    // here rather than in SQL.
    let mut artifacts = Vec::new();
    for row in rows {
        let artifact = row?;
        if filter.matches_tags(&artifact.tags) {
            artifacts.push(artifact);
        }
    }
    Ok(artifacts)
}

fn update_by_id(conn: &Connection, id: i64, artifact: &Artifact) -> StoreResult<()> {
    let changed = conn.execute(
        "UPDATE artifacts
         SET title = ?1, category = ?2, tags = ?3, author = ?4, status = ?5, template = ?6
         WHERE id = ?7",
        params![
            artifact.title,
            artifact.category,
            join_tags(&artifact.tags),
            artifact.author,
            artifact.status,
            artifact.template,
            id
        ],
    )?;

    if changed == 0 {
        return Err(StoreError::ArtifactNotFound(id));
    }
    Ok(())
}

fn insert(conn: &Connection, artifact: &NewArtifact) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO artifacts (title, category, tags, author, status, template)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            artifact.title,
            artifact.category,
            join_tags(&artifact.tags),
            artifact.author,
            artifact.status,
            artifact.template,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
