//! Comment moderation endpoints.

use actix_web::{HttpResponse, web};
use quill_core::domain::Comment;
use quill_core::lifecycle::{CommentAction, Transition};
use quill_shared::dto::{BatchActionRequest, CommentResponse};
use quill_shared::ApiResponse;
use uuid::Uuid;

use super::batch_reply;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        post_id: comment.post_id,
        author_id: comment.author_id,
        content: comment.content,
        status: comment.status.as_str().to_string(),
        status_label: comment.status.label().to_string(),
        status_color: comment.status.color().to_string(),
        published_at: comment.published_at,
    }
}

/// GET /api/comments/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let comment = state.lifecycle.find_comment(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(comment))))
}

/// POST /api/comments/{id}/{action}
pub async fn apply(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> AppResult<HttpResponse> {
    let (id, action) = path.into_inner();
    let action: CommentAction = action.parse()?;

    let comment = state.lifecycle.apply_comment(id, action).await?;
    let message = format!("Comment {}.", action.past_tense());
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(to_response(comment), message)))
}

/// POST /api/comments/batch/{action}
pub async fn batch(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BatchActionRequest>,
) -> AppResult<HttpResponse> {
    let action: CommentAction = path.parse()?;
    let changed = state.lifecycle.batch_comments(&body.ids, action).await?;
    Ok(batch_reply("comment", action.name(), action.past_tense(), changed))
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use quill_core::domain::{Comment, CommentStatus};
    use quill_core::lifecycle::TransitionPolicy;
    use quill_core::ports::BaseRepository;
    use serde_json::json;
    use uuid::Uuid;

    use crate::handlers::test_support::{Stores, app};

    #[actix_web::test]
    async fn test_batch_approve_twice() {
        let stores = Stores::new();
        let post_id = Uuid::new_v4();
        let mut ids = Vec::new();
        for i in 0..3 {
            let comment = Comment::new(
                post_id,
                Uuid::new_v4(),
                format!("Comment {i}"),
                chrono::Utc::now(),
            );
            ids.push(stores.comments.save(comment).await.unwrap().id);
        }
        let app = test::init_service(app(stores.state(TransitionPolicy::Permissive))).await;

        let req = test::TestRequest::post()
            .uri("/api/comments/batch/approve")
            .set_json(json!({ "ids": ids }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["changed"], 3);
        assert_eq!(body["message"], "3 comment(s) approved.");

        let req = test::TestRequest::post()
            .uri("/api/comments/batch/approve")
            .set_json(json!({ "ids": ids }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["changed"], 0);
    }

    #[actix_web::test]
    async fn test_mark_single_comment_as_spam() {
        let stores = Stores::new();
        let comment = Comment::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Buy now".into(),
            chrono::Utc::now(),
        );
        let id = stores.comments.save(comment).await.unwrap().id;
        let app = test::init_service(app(stores.state(TransitionPolicy::Permissive))).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/comments/{id}/spam"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Comment marked as spam.");
        assert_eq!(body["data"]["status_label"], "comment.status.spam");
        assert_eq!(body["data"]["status_color"], CommentStatus::Spam.color());
        let stored = stores.comments.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.status, CommentStatus::Spam);
    }
}
