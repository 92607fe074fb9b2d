//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the persistence adapters and the pre-save hooks they run.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM
//!
//! Without `postgres` only the in-memory store is available.

pub mod database;
pub mod hooks;
pub mod memory;

// Re-exports - In-Memory
pub use hooks::{HookChain, PostSlugHook};
pub use memory::{
    InMemoryCommentRepository, InMemoryPostRepository, InMemoryStore, InMemorySubscriberRepository,
};

// Re-exports - PostgreSQL
pub use database::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use database::{PostgresCommentRepository, PostgresPostRepository, PostgresSubscriberRepository};
