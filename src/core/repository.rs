use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Read side of a store. An absent result is distinct from an empty one and from a failure.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // all stored entities, or None when the store has nothing to report
    async fn find_all(&self) -> LibraryResult<Option<Vec<Entity>>>;

    // a single entity by its identifier
    async fn find_by_id(&self, id: &str) -> LibraryResult<Option<Entity>>;
}
