//! Counters shown as badges next to the admin menu entries.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{CommentStatus, PostStatus};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository, SubscriberRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardSummary {
    pub draft_posts: u64,
    pub pending_comments: u64,
    pub unconfirmed_subscribers: u64,
    pub active_subscribers: u64,
    pub pending_subscribers: u64,
}

#[derive(Clone)]
pub struct DashboardService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    subscribers: Arc<dyn SubscriberRepository>,
}

impl DashboardService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        subscribers: Arc<dyn SubscriberRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            subscribers,
        }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, DomainError> {
        Ok(DashboardSummary {
            draft_posts: self.posts.count_by_status(PostStatus::Draft).await?,
            pending_comments: self
                .comments
                .count_by_status(CommentStatus::Pending)
                .await?,
            unconfirmed_subscribers: self.subscribers.count_unconfirmed().await?,
            active_subscribers: self.subscribers.count_active().await?,
            pending_subscribers: self.subscribers.count_pending().await?,
        })
    }
}
