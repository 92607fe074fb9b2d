use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Transition;
use crate::domain::Entity;
use crate::error::DomainError;
use crate::ports::BaseRepository;

/// Resolve `ids`, apply `action` to every entity for which `guard` holds,
/// and persist the changed entities in one unit of work.
///
/// Unknown ids are skipped. Repeated ids are only looked at once. The
/// returned count is the number of entities the store reported as written;
/// if the commit fails, the error is returned and nothing is counted.
pub async fn batch_apply<T, R, G, A>(
    repo: &R,
    ids: &[Uuid],
    guard: G,
    mut action: A,
) -> Result<usize, DomainError>
where
    T: Entity,
    R: BaseRepository<T, Uuid> + ?Sized,
    G: Fn(&T) -> bool,
    A: FnMut(&mut T),
{
    let mut seen = HashSet::with_capacity(ids.len());
    let mut changed = Vec::new();

    for &id in ids {
        if !seen.insert(id) {
            continue;
        }

        let Some(mut entity) = repo.find_by_id(id).await? else {
            tracing::debug!(entity = T::NAME, %id, "Skipping unknown id in batch");
            continue;
        };

        if guard(&entity) {
            action(&mut entity);
            changed.push(entity);
        }
    }

    if changed.is_empty() {
        return Ok(0);
    }

    let written = repo.save_all(changed).await?;
    Ok(written)
}

/// [`batch_apply`] with the guard and effect of a named transition.
pub async fn batch_transition<T, R, X>(
    repo: &R,
    ids: &[Uuid],
    transition: X,
    now: DateTime<Utc>,
) -> Result<usize, DomainError>
where
    T: Entity,
    R: BaseRepository<T, Uuid> + ?Sized,
    X: Transition<T>,
{
    let changed = batch_apply(
        repo,
        ids,
        |entity: &T| transition.is_allowed(entity),
        |entity: &mut T| transition.apply(entity, now),
    )
    .await?;

    tracing::info!(
        entity = T::NAME,
        action = transition.name(),
        requested = ids.len(),
        changed,
        "Batch transition applied"
    );

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comment, CommentStatus, Post, PostStatus};
    use crate::lifecycle::{CommentAction, PostAction};
    use crate::testing::MemoryRepo;

    fn pending_comments(n: usize) -> Vec<Comment> {
        let post_id = Uuid::new_v4();
        (0..n)
            .map(|i| Comment::new(post_id, Uuid::new_v4(), format!("comment {i}"), Utc::now()))
            .collect()
    }

    #[tokio::test]
    async fn test_empty_id_list_changes_nothing() {
        let repo = MemoryRepo::<Comment>::default();
        let count = batch_transition(&repo, &[], CommentAction::Approve, Utc::now())
            .await
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(repo.save_all_calls(), 0);
    }

    #[tokio::test]
    async fn test_approve_three_then_again() {
        let comments = pending_comments(3);
        let ids: Vec<Uuid> = comments.iter().map(|c| c.id).collect();
        let repo = MemoryRepo::with(comments);

        let first = batch_transition(&repo, &ids, CommentAction::Approve, Utc::now())
            .await
            .unwrap();
        assert_eq!(first, 3);
        for id in &ids {
            assert_eq!(repo.get(*id).unwrap().status, CommentStatus::Approved);
        }

        let second = batch_transition(&repo, &ids, CommentAction::Approve, Utc::now())
            .await
            .unwrap();
        assert_eq!(second, 0);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_skipped() {
        let comments = pending_comments(1);
        let known = comments[0].id;
        let repo = MemoryRepo::with(comments);

        let count = batch_transition(
            &repo,
            &[known, Uuid::new_v4()],
            CommentAction::MarkAsSpam,
            Utc::now(),
        )
        .await
        .unwrap();

        assert_eq!(count, 1);
        assert!(repo.get(known).unwrap().is_spam());
    }

    #[tokio::test]
    async fn test_guard_filters_mixed_batch() {
        let mut comments = pending_comments(3);
        comments[1].status = CommentStatus::Spam;
        let ids: Vec<Uuid> = comments.iter().map(|c| c.id).collect();
        let repo = MemoryRepo::with(comments);

        let count = batch_transition(&repo, &ids, CommentAction::Reject, Utc::now())
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert!(repo.get(ids[1]).unwrap().is_spam());
        assert_eq!(repo.get(ids[2]).unwrap().status, CommentStatus::Rejected);
    }

    #[tokio::test]
    async fn test_duplicate_ids_count_once() {
        let comments = pending_comments(1);
        let id = comments[0].id;
        let repo = MemoryRepo::with(comments);

        let count = batch_transition(&repo, &[id, id, id], CommentAction::Approve, Utc::now())
            .await
            .unwrap();

        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_all_changes_go_through_one_save_all() {
        let comments = pending_comments(4);
        let ids: Vec<Uuid> = comments.iter().map(|c| c.id).collect();
        let repo = MemoryRepo::with(comments);

        batch_transition(&repo, &ids, CommentAction::Approve, Utc::now())
            .await
            .unwrap();

        assert_eq!(repo.save_all_calls(), 1);
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_commit_reports_no_count() {
        let comments = pending_comments(2);
        let ids: Vec<Uuid> = comments.iter().map(|c| c.id).collect();
        let repo = MemoryRepo::with(comments);
        repo.fail_writes();

        let result = batch_transition(&repo, &ids, CommentAction::Approve, Utc::now()).await;

        assert!(matches!(result, Err(DomainError::Persistence(_))));
        for id in &ids {
            assert!(repo.get(*id).unwrap().is_pending());
        }
    }

    #[tokio::test]
    async fn test_publish_stamps_the_given_instant() {
        let now = Utc::now();
        let post = Post::new(Uuid::new_v4(), "Title".into(), String::new(), String::new(), now);
        let id = post.id;
        let repo = MemoryRepo::with(vec![post]);

        batch_transition(&repo, &[id], PostAction::Publish, now)
            .await
            .unwrap();

        let stored = repo.get(id).unwrap();
        assert_eq!(stored.status, PostStatus::Published);
        assert_eq!(stored.published_at, Some(now));
    }

    #[tokio::test]
    async fn test_custom_guard_and_action() {
        let mut posts: Vec<Post> = (0..3)
            .map(|i| {
                Post::new(
                    Uuid::new_v4(),
                    format!("Post {i}"),
                    String::new(),
                    String::new(),
                    Utc::now(),
                )
            })
            .collect();
        posts[0].view_count = 10_000;
        let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let repo = MemoryRepo::with(posts);

        let count = batch_apply(
            &repo,
            &ids,
            |post: &Post| post.view_count > 1_000,
            |post: &mut Post| post.is_featured = true,
        )
        .await
        .unwrap();

        assert_eq!(count, 1);
        assert!(repo.get(ids[0]).unwrap().is_featured);
        assert!(!repo.get(ids[1]).unwrap().is_featured);
    }
}
