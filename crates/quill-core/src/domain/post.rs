use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, UnknownVariant};

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
    Archived,
}

impl PostStatus {
    pub const ALL: [PostStatus; 4] = [
        PostStatus::Draft,
        PostStatus::Published,
        PostStatus::Scheduled,
        PostStatus::Archived,
    ];

    /// Stored value, as written to the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Archived => "archived",
        }
    }

    /// Translation key for admin labels.
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Draft => "post.status.draft",
            PostStatus::Published => "post.status.published",
            PostStatus::Scheduled => "post.status.scheduled",
            PostStatus::Archived => "post.status.archived",
        }
    }

    /// Badge color used when listing posts.
    pub fn color(&self) -> &'static str {
        match self {
            PostStatus::Draft => "secondary",
            PostStatus::Published => "success",
            PostStatus::Scheduled => "info",
            PostStatus::Archived => "warning",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("post status", s))
    }
}

/// Post entity - represents a blog post or article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub series_id: Option<Uuid>,
    pub series_position: Option<i32>,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub view_count: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new draft post. The slug is left empty for the pre-save hook.
    pub fn new(
        author_id: Uuid,
        title: String,
        summary: String,
        content: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            category_id: None,
            series_id: None,
            series_position: None,
            title,
            slug: String::new(),
            summary,
            content,
            featured_image: None,
            status: PostStatus::Draft,
            published_at: None,
            scheduled_at: None,
            view_count: 0,
            is_featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_draft(&self) -> bool {
        self.status == PostStatus::Draft
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == PostStatus::Scheduled
    }

    pub fn is_archived(&self) -> bool {
        self.status == PostStatus::Archived
    }

    /// Move the post to `Published` and stamp `published_at` in the same step.
    ///
    /// Does not check the current status; callers gate on [`Post::is_draft`].
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Published;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    /// Return the post to `Draft`. `published_at` keeps its last value.
    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Draft;
        self.updated_at = now;
    }

    pub fn archive(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Archived;
        self.updated_at = now;
    }

    pub fn mark_featured(&mut self, now: DateTime<Utc>) {
        self.is_featured = true;
        self.updated_at = now;
    }
}

impl Entity for Post {
    const NAME: &'static str = "post";

    fn id(&self) -> Uuid {
        self.id
    }
}
