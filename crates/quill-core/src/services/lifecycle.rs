//! Single-entity and batch status changes, backed by the repository ports.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Comment, Entity, Post, Subscriber};
use crate::error::DomainError;
use crate::lifecycle::{
    CommentAction, PostAction, SubscriberAction, Transition, TransitionPolicy, batch_transition,
};
use crate::ports::{
    BaseRepository, Clock, CommentRepository, PostRepository, SubscriberRepository, SystemClock,
};

/// Entry point for every moderation action the admin exposes.
#[derive(Clone)]
pub struct LifecycleService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    subscribers: Arc<dyn SubscriberRepository>,
    clock: Arc<dyn Clock>,
    policy: TransitionPolicy,
}

impl LifecycleService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        subscribers: Arc<dyn SubscriberRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            subscribers,
            clock: Arc::new(SystemClock),
            policy: TransitionPolicy::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    // Posts

    pub async fn find_post(&self, id: Uuid) -> Result<Post, DomainError> {
        load(self.posts.as_ref(), id).await
    }

    pub async fn apply_post(&self, id: Uuid, action: PostAction) -> Result<Post, DomainError> {
        self.apply_one(self.posts.as_ref(), id, action).await
    }

    pub async fn batch_posts(&self, ids: &[Uuid], action: PostAction) -> Result<usize, DomainError> {
        batch_transition(self.posts.as_ref(), ids, action, self.clock.now()).await
    }

    pub async fn publish_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.apply_post(id, PostAction::Publish).await
    }

    pub async fn unpublish_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.apply_post(id, PostAction::Unpublish).await
    }

    pub async fn archive_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.apply_post(id, PostAction::Archive).await
    }

    pub async fn feature_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.apply_post(id, PostAction::Feature).await
    }

    // Comments

    pub async fn find_comment(&self, id: Uuid) -> Result<Comment, DomainError> {
        load(self.comments.as_ref(), id).await
    }

    pub async fn apply_comment(
        &self,
        id: Uuid,
        action: CommentAction,
    ) -> Result<Comment, DomainError> {
        self.apply_one(self.comments.as_ref(), id, action).await
    }

    pub async fn batch_comments(
        &self,
        ids: &[Uuid],
        action: CommentAction,
    ) -> Result<usize, DomainError> {
        batch_transition(self.comments.as_ref(), ids, action, self.clock.now()).await
    }

    pub async fn approve_comment(&self, id: Uuid) -> Result<Comment, DomainError> {
        self.apply_comment(id, CommentAction::Approve).await
    }

    pub async fn reject_comment(&self, id: Uuid) -> Result<Comment, DomainError> {
        self.apply_comment(id, CommentAction::Reject).await
    }

    pub async fn mark_comment_as_spam(&self, id: Uuid) -> Result<Comment, DomainError> {
        self.apply_comment(id, CommentAction::MarkAsSpam).await
    }

    // Subscribers

    pub async fn find_subscriber(&self, id: Uuid) -> Result<Subscriber, DomainError> {
        load(self.subscribers.as_ref(), id).await
    }

    pub async fn apply_subscriber(
        &self,
        id: Uuid,
        action: SubscriberAction,
    ) -> Result<Subscriber, DomainError> {
        self.apply_one(self.subscribers.as_ref(), id, action).await
    }

    pub async fn batch_subscribers(
        &self,
        ids: &[Uuid],
        action: SubscriberAction,
    ) -> Result<usize, DomainError> {
        batch_transition(self.subscribers.as_ref(), ids, action, self.clock.now()).await
    }

    pub async fn confirm_subscriber(&self, id: Uuid) -> Result<Subscriber, DomainError> {
        self.apply_subscriber(id, SubscriberAction::Confirm).await
    }

    pub async fn unsubscribe_subscriber(&self, id: Uuid) -> Result<Subscriber, DomainError> {
        self.apply_subscriber(id, SubscriberAction::Unsubscribe).await
    }

    async fn apply_one<T, R, X>(&self, repo: &R, id: Uuid, transition: X) -> Result<T, DomainError>
    where
        T: Entity,
        R: BaseRepository<T, Uuid> + ?Sized,
        X: Transition<T>,
    {
        let mut entity = load(repo, id).await?;

        if self.policy == TransitionPolicy::Strict && !transition.is_allowed(&entity) {
            tracing::warn!(
                entity = T::NAME,
                action = transition.name(),
                %id,
                "Rejected transition"
            );
            return Err(DomainError::InvalidTransition {
                entity_type: T::NAME,
                id,
                action: transition.name(),
            });
        }

        transition.apply(&mut entity, self.clock.now());
        let saved = repo.save(entity).await?;

        tracing::info!(
            entity = T::NAME,
            action = transition.name(),
            %id,
            "Transition applied"
        );

        Ok(saved)
    }
}

async fn load<T, R>(repo: &R, id: Uuid) -> Result<T, DomainError>
where
    T: Entity,
    R: BaseRepository<T, Uuid> + ?Sized,
{
    repo.find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: T::NAME,
            id,
        })
}
