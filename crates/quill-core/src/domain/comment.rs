use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, UnknownVariant};

/// Moderation status of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    #[default]
    Pending,
    Approved,
    Spam,
    Rejected,
}

impl CommentStatus {
    pub const ALL: [CommentStatus; 4] = [
        CommentStatus::Pending,
        CommentStatus::Approved,
        CommentStatus::Spam,
        CommentStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "pending",
            CommentStatus::Approved => "approved",
            CommentStatus::Spam => "spam",
            CommentStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "comment.status.pending",
            CommentStatus::Approved => "comment.status.approved",
            CommentStatus::Spam => "comment.status.spam",
            CommentStatus::Rejected => "comment.status.rejected",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "warning",
            CommentStatus::Approved => "success",
            CommentStatus::Spam => "danger",
            CommentStatus::Rejected => "secondary",
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("comment status", s))
    }
}

/// Comment entity - a reader's comment awaiting or past moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub status: CommentStatus,
    pub published_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment in the moderation queue.
    pub fn new(post_id: Uuid, author_id: Uuid, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            content,
            status: CommentStatus::Pending,
            published_at: now,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == CommentStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == CommentStatus::Approved
    }

    pub fn is_spam(&self) -> bool {
        self.status == CommentStatus::Spam
    }

    pub fn approve(&mut self) {
        self.status = CommentStatus::Approved;
    }

    pub fn reject(&mut self) {
        self.status = CommentStatus::Rejected;
    }

    pub fn mark_as_spam(&mut self) {
        self.status = CommentStatus::Spam;
    }
}

impl Entity for Comment {
    const NAME: &'static str = "comment";

    fn id(&self) -> Uuid {
        self.id
    }
}
