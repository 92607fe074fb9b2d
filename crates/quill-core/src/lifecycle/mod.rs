//! Status state machines for posts, comments and subscribers.
//!
//! Entity methods such as [`Post::publish`](crate::domain::Post::publish)
//! perform the raw field changes. The [`Transition`] enums pair each change
//! with its guard, and [`batch_apply`] runs any guard/action pair over a
//! list of ids in a single unit of work.

mod batch;
mod transition;

pub use batch::{batch_apply, batch_transition};
pub use transition::{CommentAction, PostAction, SubscriberAction, Transition};

/// Whether single-entity operations check the transition guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Apply the transition whatever the current state.
    #[default]
    Permissive,
    /// Reject a transition whose guard does not hold.
    Strict,
}
