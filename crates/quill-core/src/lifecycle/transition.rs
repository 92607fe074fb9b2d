use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::{Comment, Post, Subscriber, UnknownVariant};

/// A named state change on a `T`, together with the guard that decides
/// whether it is meaningful for a given entity.
pub trait Transition<T>: Copy + fmt::Debug + Send + Sync {
    /// Action name as used in admin routes.
    fn name(&self) -> &'static str;

    /// Verb used in result messages, e.g. "published".
    fn past_tense(&self) -> &'static str;

    fn is_allowed(&self, entity: &T) -> bool;

    /// Apply the change unconditionally.
    fn apply(&self, entity: &mut T, now: DateTime<Utc>);
}

/// Transitions available on posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Publish,
    Unpublish,
    Archive,
    Feature,
}

impl Transition<Post> for PostAction {
    fn name(&self) -> &'static str {
        match self {
            PostAction::Publish => "publish",
            PostAction::Unpublish => "unpublish",
            PostAction::Archive => "archive",
            PostAction::Feature => "feature",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            PostAction::Publish => "published",
            PostAction::Unpublish => "unpublished",
            PostAction::Archive => "archived",
            PostAction::Feature => "marked as featured",
        }
    }

    fn is_allowed(&self, post: &Post) -> bool {
        match self {
            PostAction::Publish => post.is_draft(),
            PostAction::Unpublish => post.is_published(),
            PostAction::Archive => !post.is_archived(),
            PostAction::Feature => !post.is_featured,
        }
    }

    fn apply(&self, post: &mut Post, now: DateTime<Utc>) {
        match self {
            PostAction::Publish => post.publish(now),
            PostAction::Unpublish => post.unpublish(now),
            PostAction::Archive => post.archive(now),
            PostAction::Feature => post.mark_featured(now),
        }
    }
}

impl FromStr for PostAction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(PostAction::Publish),
            "unpublish" => Ok(PostAction::Unpublish),
            "archive" => Ok(PostAction::Archive),
            "feature" => Ok(PostAction::Feature),
            other => Err(UnknownVariant::new("post action", other)),
        }
    }
}

/// Moderation transitions on comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAction {
    Approve,
    Reject,
    MarkAsSpam,
}

impl Transition<Comment> for CommentAction {
    fn name(&self) -> &'static str {
        match self {
            CommentAction::Approve => "approve",
            CommentAction::Reject => "reject",
            CommentAction::MarkAsSpam => "spam",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            CommentAction::Approve => "approved",
            CommentAction::Reject => "rejected",
            CommentAction::MarkAsSpam => "marked as spam",
        }
    }

    fn is_allowed(&self, comment: &Comment) -> bool {
        match self {
            CommentAction::Approve | CommentAction::Reject => comment.is_pending(),
            CommentAction::MarkAsSpam => !comment.is_spam(),
        }
    }

    fn apply(&self, comment: &mut Comment, _now: DateTime<Utc>) {
        match self {
            CommentAction::Approve => comment.approve(),
            CommentAction::Reject => comment.reject(),
            CommentAction::MarkAsSpam => comment.mark_as_spam(),
        }
    }
}

impl FromStr for CommentAction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(CommentAction::Approve),
            "reject" => Ok(CommentAction::Reject),
            "spam" => Ok(CommentAction::MarkAsSpam),
            other => Err(UnknownVariant::new("comment action", other)),
        }
    }
}

/// Newsletter subscription transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberAction {
    Confirm,
    Unsubscribe,
}

impl Transition<Subscriber> for SubscriberAction {
    fn name(&self) -> &'static str {
        match self {
            SubscriberAction::Confirm => "confirm",
            SubscriberAction::Unsubscribe => "unsubscribe",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            SubscriberAction::Confirm => "confirmed",
            SubscriberAction::Unsubscribe => "unsubscribed",
        }
    }

    fn is_allowed(&self, subscriber: &Subscriber) -> bool {
        match self {
            SubscriberAction::Confirm => !subscriber.is_confirmed(),
            SubscriberAction::Unsubscribe => subscriber.is_active(),
        }
    }

    fn apply(&self, subscriber: &mut Subscriber, now: DateTime<Utc>) {
        match self {
            SubscriberAction::Confirm => subscriber.confirm(now),
            SubscriberAction::Unsubscribe => subscriber.unsubscribe(now),
        }
    }
}

impl FromStr for SubscriberAction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirm" => Ok(SubscriberAction::Confirm),
            "unsubscribe" => Ok(SubscriberAction::Unsubscribe),
            other => Err(UnknownVariant::new("subscriber action", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommentStatus, PostStatus, SubscriberSource};
    use rstest::rstest;
    use uuid::Uuid;

    fn post_with(status: PostStatus) -> Post {
        let mut post = Post::new(
            Uuid::new_v4(),
            "Git Workflow Strategies".to_string(),
            String::new(),
            String::new(),
            Utc::now(),
        );
        post.status = status;
        post
    }

    fn comment_with(status: CommentStatus) -> Comment {
        let mut comment =
            Comment::new(Uuid::new_v4(), Uuid::new_v4(), "+1".to_string(), Utc::now());
        comment.status = status;
        comment
    }

    #[rstest]
    #[case(PostAction::Publish, PostStatus::Draft, true)]
    #[case(PostAction::Publish, PostStatus::Published, false)]
    #[case(PostAction::Publish, PostStatus::Scheduled, false)]
    #[case(PostAction::Publish, PostStatus::Archived, false)]
    #[case(PostAction::Unpublish, PostStatus::Published, true)]
    #[case(PostAction::Unpublish, PostStatus::Draft, false)]
    #[case(PostAction::Unpublish, PostStatus::Scheduled, false)]
    #[case(PostAction::Archive, PostStatus::Draft, true)]
    #[case(PostAction::Archive, PostStatus::Published, true)]
    #[case(PostAction::Archive, PostStatus::Scheduled, true)]
    #[case(PostAction::Archive, PostStatus::Archived, false)]
    fn test_post_guards(#[case] action: PostAction, #[case] status: PostStatus, #[case] allowed: bool) {
        assert_eq!(action.is_allowed(&post_with(status)), allowed);
    }

    #[rstest]
    #[case(CommentAction::Approve, CommentStatus::Pending, true)]
    #[case(CommentAction::Approve, CommentStatus::Approved, false)]
    #[case(CommentAction::Approve, CommentStatus::Spam, false)]
    #[case(CommentAction::Reject, CommentStatus::Pending, true)]
    #[case(CommentAction::Reject, CommentStatus::Rejected, false)]
    #[case(CommentAction::MarkAsSpam, CommentStatus::Pending, true)]
    #[case(CommentAction::MarkAsSpam, CommentStatus::Approved, true)]
    #[case(CommentAction::MarkAsSpam, CommentStatus::Rejected, true)]
    #[case(CommentAction::MarkAsSpam, CommentStatus::Spam, false)]
    fn test_comment_guards(
        #[case] action: CommentAction,
        #[case] status: CommentStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(action.is_allowed(&comment_with(status)), allowed);
    }

    #[test]
    fn test_feature_guard_ignores_status() {
        let mut post = post_with(PostStatus::Archived);
        assert!(PostAction::Feature.is_allowed(&post));
        PostAction::Feature.apply(&mut post, Utc::now());
        assert!(post.is_featured);
        assert!(post.is_archived());
        assert!(!PostAction::Feature.is_allowed(&post));
    }

    #[test]
    fn test_subscriber_guards() {
        let now = Utc::now();
        let mut s = Subscriber::new("a@example.com".to_string(), SubscriberSource::Popup, now);
        assert!(SubscriberAction::Confirm.is_allowed(&s));
        assert!(!SubscriberAction::Unsubscribe.is_allowed(&s));

        SubscriberAction::Confirm.apply(&mut s, now);
        assert!(!SubscriberAction::Confirm.is_allowed(&s));
        assert!(SubscriberAction::Unsubscribe.is_allowed(&s));

        SubscriberAction::Unsubscribe.apply(&mut s, now);
        assert!(!SubscriberAction::Unsubscribe.is_allowed(&s));
        assert_eq!(s.unsubscribed_at, Some(now));
    }

    #[test]
    fn test_action_names_parse_back() {
        for action in [
            PostAction::Publish,
            PostAction::Unpublish,
            PostAction::Archive,
            PostAction::Feature,
        ] {
            assert_eq!(action.name().parse::<PostAction>(), Ok(action));
        }
        assert_eq!("spam".parse::<CommentAction>(), Ok(CommentAction::MarkAsSpam));
        assert!("resubscribe".parse::<SubscriberAction>().is_err());
    }

    #[rstest]
    #[case(CommentAction::Approve)]
    #[case(CommentAction::Reject)]
    #[case(CommentAction::MarkAsSpam)]
    fn test_comment_action_has_one_spelling(#[case] action: CommentAction) {
        assert_eq!(action.name().parse::<CommentAction>(), Ok(action));
        assert!("mark_as_spam".parse::<CommentAction>().is_err());
    }
}
