//! SeaORM entities mirroring the domain objects.

pub mod comment;
pub mod post;
pub mod subscriber;
