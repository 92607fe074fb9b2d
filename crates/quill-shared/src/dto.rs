//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ids selected in an admin list view for a bulk action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchActionRequest {
    pub ids: Vec<Uuid>,
}

/// Outcome of a bulk action: how many records actually changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchActionResponse {
    pub action: String,
    pub changed: usize,
}

impl BatchActionResponse {
    pub fn new(action: impl Into<String>, changed: usize) -> Self {
        Self {
            action: action.into(),
            changed,
        }
    }

    /// Flash-style summary, e.g. `3 comment(s) approved.`
    pub fn summary(&self, noun: &str, past_tense: &str) -> String {
        format!("{} {}(s) {}.", self.changed, noun, past_tense)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub status: String,
    /// Translation key for the status badge.
    pub status_label: String,
    pub status_color: String,
    pub is_featured: bool,
    pub view_count: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub status: String,
    pub status_label: String,
    pub status_color: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub source: String,
    pub source_label: String,
    pub source_color: String,
    pub is_confirmed: bool,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}
