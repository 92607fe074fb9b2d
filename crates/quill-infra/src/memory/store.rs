//! In-memory unit-of-work store - used when no database is configured.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Comment, CommentStatus, Entity, Post, PostStatus, Subscriber};
use quill_core::error::RepoError;
use quill_core::ports::{
    BaseRepository, CommentRepository, PostRepository, PreSaveHook, SubscriberRepository,
};

use crate::hooks::HookChain;

/// HashMap-backed store with an async RwLock.
///
/// `save_all` runs the hooks on every entity first and then writes them all
/// under a single write lock, so readers see either none or all of a batch.
/// Note: Data is lost on process restart.
pub struct InMemoryStore<T> {
    rows: RwLock<HashMap<Uuid, T>>,
    hooks: HookChain<T>,
}

pub type InMemoryPostRepository = InMemoryStore<Post>;
pub type InMemoryCommentRepository = InMemoryStore<Comment>;
pub type InMemorySubscriberRepository = InMemoryStore<Subscriber>;

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            hooks: HookChain::new(),
        }
    }

    /// Register a hook run before every write.
    pub fn with_hook(mut self, hook: Arc<dyn PreSaveHook<T>>) -> Self {
        self.hooks.push(hook);
        self
    }

    async fn count_where(&self, predicate: impl Fn(&T) -> bool + Send) -> u64 {
        let rows = self.rows.read().await;
        rows.values().filter(|&row| predicate(row)).count() as u64
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> BaseRepository<T, Uuid> for InMemoryStore<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn save(&self, mut entity: T) -> Result<T, RepoError> {
        self.hooks.run(&mut entity);
        let mut rows = self.rows.write().await;
        rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn save_all(&self, entities: Vec<T>) -> Result<usize, RepoError> {
        let prepared: Vec<T> = entities
            .into_iter()
            .map(|mut entity| {
                self.hooks.run(&mut entity);
                entity
            })
            .collect();

        let count = prepared.len();
        let mut rows = self.rows.write().await;
        for entity in prepared {
            rows.insert(entity.id(), entity);
        }

        tracing::debug!(entity = T::NAME, count, "Unit of work committed");
        Ok(count)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn count_by_status(&self, status: PostStatus) -> Result<u64, RepoError> {
        Ok(self.count_where(|post| post.status == status).await)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn count_by_status(&self, status: CommentStatus) -> Result<u64, RepoError> {
        Ok(self.count_where(|comment| comment.status == status).await)
    }
}

#[async_trait]
impl SubscriberRepository for InMemorySubscriberRepository {
    async fn count_active(&self) -> Result<u64, RepoError> {
        Ok(self.count_where(Subscriber::is_active).await)
    }

    async fn count_pending(&self) -> Result<u64, RepoError> {
        Ok(self
            .count_where(|s| !s.is_confirmed() && !s.is_unsubscribed())
            .await)
    }

    async fn count_unconfirmed(&self) -> Result<u64, RepoError> {
        Ok(self.count_where(|s| !s.is_confirmed()).await)
    }
}
