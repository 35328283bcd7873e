//! The store contract shared by every backend.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::id::TodoId;
use crate::types::{Todo, TodoFields};

/// Collection-scoped operations over todo records.
///
/// Implementations must be safe to share across concurrent requests without
/// external locking. No operation retries on failure.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every record, in whatever order the backend yields. Not stable across
    /// calls. An empty collection is an empty vec, not an error.
    async fn list_all(&self) -> StoreResult<Vec<Todo>>;

    /// Persist a new record under a freshly generated id.
    async fn insert(&self, fields: TodoFields) -> StoreResult<Todo>;

    async fn find_by_id(&self, id: &TodoId) -> StoreResult<Todo>;

    /// Overwrite `text` and `completed` of an existing record and return it
    /// as stored. The id never changes.
    async fn update_by_id(&self, id: &TodoId, fields: TodoFields) -> StoreResult<Todo>;

    /// Remove a record, returning the number deleted. Zero matches is
    /// `StoreError::NotFound`.
    async fn delete_by_id(&self, id: &TodoId) -> StoreResult<u64>;
}
