//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::fixtures::DemoData;
use quill_core::lifecycle::TransitionPolicy;
use quill_core::ports::{
    BaseRepository, CommentRepository, PostRepository, SubscriberRepository,
};
use quill_core::services::{DashboardService, LifecycleService};
use quill_core::RepoError;
use quill_infra::{
    InMemoryCommentRepository, InMemoryPostRepository, InMemorySubscriberRepository, PostSlugHook,
};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use quill_infra::database::{
    self, PostgresCommentRepository, PostgresPostRepository, PostgresSubscriberRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub lifecycle: LifecycleService,
    pub dashboard: DashboardService,
    /// Storage backend name reported by the health check.
    pub backend: &'static str,
}

struct Repositories {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    subscribers: Arc<dyn SubscriberRepository>,
    backend: &'static str,
}

impl Repositories {
    fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new().with_hook(Arc::new(PostSlugHook))),
            comments: Arc::new(InMemoryCommentRepository::new()),
            subscribers: Arc::new(InMemorySubscriberRepository::new()),
            backend: "memory",
        }
    }

    async fn seed(&self) -> Result<(), RepoError> {
        let authors: Vec<uuid::Uuid> = (0..3).map(|_| uuid::Uuid::new_v4()).collect();
        let demo = DemoData::generate(&authors, 12, 3, 20, chrono::Utc::now());

        let posts = self.posts.save_all(demo.posts).await?;
        let comments = self.comments.save_all(demo.comments).await?;
        let subscribers = self.subscribers.save_all(demo.subscribers).await?;

        tracing::info!(posts, comments, subscribers, "Demo data seeded");
        Ok(())
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let repos = match &config.database {
            Some(db_config) => match database::connect(db_config).await {
                Ok(conn) => Repositories {
                    posts: Arc::new(
                        PostgresPostRepository::new(conn.clone()).with_hook(Arc::new(PostSlugHook)),
                    ),
                    comments: Arc::new(PostgresCommentRepository::new(conn.clone())),
                    subscribers: Arc::new(PostgresSubscriberRepository::new(conn)),
                    backend: "postgres",
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Repositories::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Repositories::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repos = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Repositories::in_memory()
        };

        if config.seed_demo_data {
            if let Err(e) = repos.seed().await {
                tracing::error!(error = %e, "Failed to seed demo data");
            }
        }

        tracing::info!(backend = repos.backend, "Application state initialized");

        Self::from_repositories(repos, config.policy)
    }

    fn from_repositories(repos: Repositories, policy: TransitionPolicy) -> Self {
        let lifecycle = LifecycleService::new(
            repos.posts.clone(),
            repos.comments.clone(),
            repos.subscribers.clone(),
        )
        .with_policy(policy);
        let dashboard = DashboardService::new(repos.posts, repos.comments, repos.subscribers);

        Self {
            lifecycle,
            dashboard,
            backend: repos.backend,
        }
    }

    /// State over the given in-memory stores, for handler tests.
    #[cfg(test)]
    pub fn with_stores(
        posts: Arc<InMemoryPostRepository>,
        comments: Arc<InMemoryCommentRepository>,
        subscribers: Arc<InMemorySubscriberRepository>,
        policy: TransitionPolicy,
    ) -> Self {
        Self::from_repositories(
            Repositories {
                posts,
                comments,
                subscribers,
                backend: "memory",
            },
            policy,
        )
    }
}
