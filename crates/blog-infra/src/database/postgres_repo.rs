//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<BlogPost, RepoError> {
        if changes.is_empty() {
            return BlogPostEntity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(map_db_err)?
                .map(Into::into)
                .ok_or(RepoError::NotFound);
        }

        tracing::debug!(blog_post_id = %id, "Updating blog post");

        // Only the columns marked Set are written; UPDATE ... RETURNING on a
        // missing row surfaces as RecordNotUpdated.
        let active = blog_post::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: changes
                .title
                .map(ActiveValue::Set)
                .unwrap_or(ActiveValue::NotSet),
            author: ActiveValue::NotSet,
            content: changes
                .content
                .map(ActiveValue::Set)
                .unwrap_or(ActiveValue::NotSet),
            created_at: ActiveValue::NotSet,
        };

        let model = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }
}
