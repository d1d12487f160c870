use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostChanges};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Fetch every entity in the collection.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// Apply a partial update and return the stored record.
    /// Returns `RepoError::NotFound` if the id does not exist.
    async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<BlogPost, RepoError>;

    /// Total number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;
}
