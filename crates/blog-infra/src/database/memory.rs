//! In-memory blog post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// In-memory repository keeping posts in insertion order behind an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryBlogPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.id == entity.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        posts.push(entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        posts.remove(index);
        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        post.apply(changes);
        Ok(post.clone())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use blog_core::domain::NewBlogPost;
    use blog_core::{BlogPostStore, DomainError};

    use super::*;

    fn store() -> BlogPostStore {
        BlogPostStore::new(Arc::new(InMemoryBlogPostRepository::new()))
    }

    fn fields(title: &str) -> NewBlogPost {
        NewBlogPost {
            title: Some(title.to_string()),
            author: Some("Grace".to_string()),
            content: Some(format!("{title} body")),
        }
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = store();
        assert!(store.get_all().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let store = store();
        let created = store.create(fields("One")).await.unwrap();

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let store = store();
        let err = store.create(NewBlogPost::default()).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_all_keeps_insertion_order() {
        let store = store();
        for title in ["a", "b", "c"] {
            store.create(fields(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_applies_partial_changes() {
        let store = store();
        let created = store.create(fields("Before")).await.unwrap();

        let updated = store
            .update(
                created.id,
                BlogPostChanges {
                    title: None,
                    content: Some("After body".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Before");
        assert_eq!(updated.content, "After body");
        assert_eq!(updated.author, created.author);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = store();
        let id = Uuid::new_v4();

        let err = store
            .update(id, BlogPostChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: missing, .. } if missing == id));
    }

    #[tokio::test]
    async fn test_delete_then_fetch_is_none() {
        let store = store();
        let created = store.create(fields("Doomed")).await.unwrap();

        store.delete(created.id).await.unwrap();

        assert_eq!(store.get_by_id(created.id).await.unwrap(), None);
        assert!(matches!(
            store.delete(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_a_constraint_violation() {
        let repo = InMemoryBlogPostRepository::new();
        let post = BlogPost::create(fields("Twice")).unwrap();

        repo.insert(post.clone()).await.unwrap();
        assert!(matches!(
            repo.insert(post).await,
            Err(RepoError::Constraint(_))
        ));
    }
}
