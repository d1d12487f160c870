//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::BlogPostStore;
use blog_infra::InMemoryBlogPostRepository;

use crate::config::AppConfig;

/// Which repository backs the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog_posts: BlogPostStore,
    pub backend: StoreBackend,
}

impl AppState {
    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self {
            blog_posts: BlogPostStore::new(Arc::new(InMemoryBlogPostRepository::new())),
            backend: StoreBackend::Memory,
        }
    }

    /// Build the application state with the configured repository, falling
    /// back to memory when no database is configured or reachable.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let state = match &config.database {
            Some(db_config) => match Self::postgres(db_config, config.auto_migrate).await {
                Ok(state) => state,
                Err(e) => {
                    tracing::error!(
                        "Failed to initialize database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored - built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!(store = state.backend.as_str(), "Application state initialized");

        state
    }

    #[cfg(feature = "postgres")]
    async fn postgres(
        db_config: &blog_infra::DatabaseConfig,
        auto_migrate: bool,
    ) -> Result<Self, blog_core::RepoError> {
        use blog_core::RepoError;
        use blog_infra::PostgresBlogPostRepository;
        use migration::{Migrator, MigratorTrait};

        let conn = blog_infra::database::connect(db_config).await?;

        if auto_migrate {
            tracing::info!("Applying pending migrations");
            Migrator::up(&conn, None)
                .await
                .map_err(|e| RepoError::Query(e.to_string()))?;
        }

        Ok(Self {
            blog_posts: BlogPostStore::new(Arc::new(PostgresBlogPostRepository::new(conn))),
            backend: StoreBackend::Postgres,
        })
    }
}
