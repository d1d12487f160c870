//! Resource store - the operations exposed for the blog post collection.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::error::{DomainError, RepoError};
use crate::ports::BlogPostRepository;

/// Binds the `BlogPost` schema to a repository.
///
/// Every operation is a single repository call. Not-found on reads is a
/// `None`, on writes it is `DomainError::NotFound`.
#[derive(Clone)]
pub struct BlogPostStore {
    repo: Arc<dyn BlogPostRepository>,
}

impl BlogPostStore {
    pub fn new(repo: Arc<dyn BlogPostRepository>) -> Self {
        Self { repo }
    }

    /// Validate, assign `id` and `created_at`, persist.
    pub async fn create(&self, fields: NewBlogPost) -> Result<BlogPost, DomainError> {
        let post = BlogPost::create(fields)?;
        Ok(self.repo.insert(post).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, DomainError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<BlogPost, DomainError> {
        changes.validate()?;
        self.repo
            .update(id, changes)
            .await
            .map_err(|e| not_found_for(id, e))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| not_found_for(id, e))
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.repo.count().await?)
    }
}

fn not_found_for(id: Uuid, err: RepoError) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: BlogPost::ENTITY_TYPE,
            id,
        },
        other => DomainError::Store(other),
    }
}
