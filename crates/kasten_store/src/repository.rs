//! Repository contract for artifact records.

use crate::error::StoreResult;
use crate::models::{Artifact, ArtifactFilter, NewArtifact};

/// Query and mutation contract an artifact store must support.
///
/// `find_by_filter` is a snapshot read: callers that need the read and the
/// follow-up writes to commit as one unit should go through
/// [`SqliteStore::transaction`](crate::SqliteStore::transaction), whose
/// view also implements this trait.
pub trait ArtifactRepository {
    /// Every artifact matching the filter, in store order.
    fn find_by_filter(&self, filter: &ArtifactFilter) -> StoreResult<Vec<Artifact>>;

    /// Full-row replacement keyed by artifact id.
    ///
    /// Fails with [`StoreError::ArtifactNotFound`](crate::StoreError::ArtifactNotFound)
    /// if no row carries the id.
    fn update_by_id(&self, id: i64, artifact: &Artifact) -> StoreResult<()>;

    /// Insert a new record, returning the store-assigned id.
    fn insert(&self, artifact: &NewArtifact) -> StoreResult<i64>;
}
