use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, CommentStatus, Post, PostStatus, Subscriber};
use crate::error::RepoError;

/// Generic repository trait defining standard persistence operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Save several entities as one unit of work.
    ///
    /// Either every entity is written or none is. Returns how many were written.
    async fn save_all(&self, entities: Vec<T>) -> Result<usize, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn count_by_status(&self, status: PostStatus) -> Result<u64, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    async fn count_by_status(&self, status: CommentStatus) -> Result<u64, RepoError>;
}

/// Subscriber repository with the counters shown on the dashboard.
#[async_trait]
pub trait SubscriberRepository: BaseRepository<Subscriber, Uuid> {
    /// Confirmed and not unsubscribed.
    async fn count_active(&self) -> Result<u64, RepoError>;

    /// Not yet confirmed and not unsubscribed.
    async fn count_pending(&self) -> Result<u64, RepoError>;

    /// Not yet confirmed, regardless of unsubscription.
    async fn count_unconfirmed(&self) -> Result<u64, RepoError>;
}
