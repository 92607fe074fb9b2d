//! Dashboard counters.

use actix_web::{HttpResponse, web};
use quill_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn summary(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let summary = state.dashboard.summary().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(summary)))
}
