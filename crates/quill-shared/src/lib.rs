//! # Quill Shared
//!
//! Request and response types exchanged with the admin API.
//! Kept free of domain types so clients can depend on it alone.

pub mod dto;
pub mod response;

pub use dto::{BatchActionRequest, BatchActionResponse};
pub use response::{ApiResponse, ErrorResponse};
