//! Domain entities - the core business objects.

use uuid::Uuid;

mod comment;
mod post;
mod subscriber;

pub use comment::{Comment, CommentStatus};
pub use post::{Post, PostStatus};
pub use subscriber::{Subscriber, SubscriberSource};

/// Common shape of every persisted domain object.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Name used in errors and log fields.
    const NAME: &'static str;

    fn id(&self) -> Uuid;
}

/// A stored enum value that matches none of the known variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
