//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod hooks;
mod repository;

pub use clock::{Clock, FixedClock, SystemClock};
pub use hooks::PreSaveHook;
pub use repository::{BaseRepository, CommentRepository, PostRepository, SubscriberRepository};
