//! # Quill Core
//!
//! The domain layer of the Quill blog admin: posts, comments and newsletter
//! subscribers, and the status transitions that moderate them.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod fixtures;
pub mod lifecycle;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{DomainError, RepoError};
