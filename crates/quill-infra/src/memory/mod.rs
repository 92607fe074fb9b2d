//! In-memory persistence - the fallback when no database is configured.

mod store;

pub use store::{
    InMemoryCommentRepository, InMemoryPostRepository, InMemoryStore, InMemorySubscriberRepository,
};
