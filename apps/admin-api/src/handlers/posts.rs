//! Post publishing endpoints.

use actix_web::{HttpResponse, web};
use quill_core::domain::Post;
use quill_core::lifecycle::{PostAction, Transition};
use quill_shared::dto::{BatchActionRequest, PostResponse};
use quill_shared::ApiResponse;
use uuid::Uuid;

use super::batch_reply;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author_id: post.author_id,
        title: post.title,
        slug: post.slug,
        summary: post.summary,
        status: post.status.as_str().to_string(),
        status_label: post.status.label().to_string(),
        status_color: post.status.color().to_string(),
        is_featured: post.is_featured,
        view_count: post.view_count,
        published_at: post.published_at,
        scheduled_at: post.scheduled_at,
        updated_at: post.updated_at,
    }
}

/// GET /api/posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.lifecycle.find_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// POST /api/posts/{id}/{action}
pub async fn apply(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> AppResult<HttpResponse> {
    let (id, action) = path.into_inner();
    let action: PostAction = action.parse()?;

    let post = state.lifecycle.apply_post(id, action).await?;
    let message = format!("Post {}.", action.past_tense());
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(to_response(post), message)))
}

/// POST /api/posts/batch/{action}
pub async fn batch(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BatchActionRequest>,
) -> AppResult<HttpResponse> {
    let action: PostAction = path.parse()?;
    let changed = state.lifecycle.batch_posts(&body.ids, action).await?;
    Ok(batch_reply("post", action.name(), action.past_tense(), changed))
}
