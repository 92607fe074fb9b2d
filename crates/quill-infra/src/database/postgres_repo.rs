//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use quill_core::domain::{Comment, CommentStatus, Post, PostStatus, Subscriber};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository, SubscriberRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::subscriber::{self, Entity as SubscriberEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity, Post>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity, Comment>;

/// PostgreSQL subscriber repository.
pub type PostgresSubscriberRepository = PostgresBaseRepository<SubscriberEntity, Subscriber>;

fn query_error(e: sea_orm::DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn count_by_status(&self, status: PostStatus) -> Result<u64, RepoError> {
        PostEntity::find()
            .filter(post::Column::Status.eq(post::Status::from(status)))
            .count(&self.db)
            .await
            .map_err(query_error)
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn count_by_status(&self, status: CommentStatus) -> Result<u64, RepoError> {
        CommentEntity::find()
            .filter(comment::Column::Status.eq(comment::Status::from(status)))
            .count(&self.db)
            .await
            .map_err(query_error)
    }
}

#[async_trait]
impl SubscriberRepository for PostgresSubscriberRepository {
    async fn count_active(&self) -> Result<u64, RepoError> {
        SubscriberEntity::find()
            .filter(subscriber::Column::IsConfirmed.eq(true))
            .filter(subscriber::Column::UnsubscribedAt.is_null())
            .count(&self.db)
            .await
            .map_err(query_error)
    }

    async fn count_pending(&self) -> Result<u64, RepoError> {
        SubscriberEntity::find()
            .filter(subscriber::Column::IsConfirmed.eq(false))
            .filter(subscriber::Column::UnsubscribedAt.is_null())
            .count(&self.db)
            .await
            .map_err(query_error)
    }

    async fn count_unconfirmed(&self) -> Result<u64, RepoError> {
        SubscriberEntity::find()
            .filter(subscriber::Column::IsConfirmed.eq(false))
            .count(&self.db)
            .await
            .map_err(query_error)
    }
}
