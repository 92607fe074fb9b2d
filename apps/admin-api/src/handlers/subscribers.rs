//! Newsletter subscriber endpoints.

use actix_web::{HttpResponse, web};
use quill_core::domain::Subscriber;
use quill_core::lifecycle::{SubscriberAction, Transition};
use quill_shared::dto::{BatchActionRequest, SubscriberResponse};
use quill_shared::ApiResponse;
use uuid::Uuid;

use super::batch_reply;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(subscriber: Subscriber) -> SubscriberResponse {
    let is_active = subscriber.is_active();
    SubscriberResponse {
        id: subscriber.id,
        email: subscriber.email,
        name: subscriber.name,
        source: subscriber.source.as_str().to_string(),
        source_label: subscriber.source.label().to_string(),
        source_color: subscriber.source.color().to_string(),
        is_confirmed: subscriber.is_confirmed,
        is_active,
        subscribed_at: subscriber.subscribed_at,
        confirmed_at: subscriber.confirmed_at,
        unsubscribed_at: subscriber.unsubscribed_at,
    }
}

/// GET /api/subscribers/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let subscriber = state.lifecycle.find_subscriber(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(subscriber))))
}

/// POST /api/subscribers/{id}/{action}
pub async fn apply(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> AppResult<HttpResponse> {
    let (id, action) = path.into_inner();
    let action: SubscriberAction = action.parse()?;

    let subscriber = state.lifecycle.apply_subscriber(id, action).await?;
    let message = format!("Subscriber {}.", action.past_tense());
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        to_response(subscriber),
        message,
    )))
}

/// POST /api/subscribers/batch/{action}
pub async fn batch(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BatchActionRequest>,
) -> AppResult<HttpResponse> {
    let action: SubscriberAction = path.parse()?;
    let changed = state.lifecycle.batch_subscribers(&body.ids, action).await?;
    Ok(batch_reply("subscriber", action.name(), action.past_tense(), changed))
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use quill_core::domain::{Subscriber, SubscriberSource};
    use quill_core::lifecycle::TransitionPolicy;
    use quill_core::ports::{BaseRepository, SubscriberRepository};
    use serde_json::json;

    use crate::handlers::test_support::{Stores, app};

    #[actix_web::test]
    async fn test_unsubscribe_never_confirmed_subscriber() {
        let stores = Stores::new();
        let subscriber = Subscriber::new(
            "reader@example.com".into(),
            SubscriberSource::Homepage,
            chrono::Utc::now(),
        );
        let id = stores.subscribers.save(subscriber).await.unwrap().id;
        let app = test::init_service(app(stores.state(TransitionPolicy::Permissive))).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/subscribers/{id}/unsubscribe"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["is_active"], false);
        assert_eq!(body["data"]["source_label"], "subscriber.source.homepage");
        assert_eq!(body["data"]["source_color"], "primary");
        assert_eq!(body["data"]["is_confirmed"], false);
        assert!(body["data"]["unsubscribed_at"].is_string());
    }

    #[actix_web::test]
    async fn test_batch_confirm() {
        let stores = Stores::new();
        let mut ids = Vec::new();
        for email in ["a@example.com", "b@example.com"] {
            let subscriber = Subscriber::new(
                email.into(),
                SubscriberSource::Blog,
                chrono::Utc::now(),
            );
            ids.push(stores.subscribers.save(subscriber).await.unwrap().id);
        }
        let app = test::init_service(app(stores.state(TransitionPolicy::Permissive))).await;

        let req = test::TestRequest::post()
            .uri("/api/subscribers/batch/confirm")
            .set_json(json!({ "ids": ids }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["changed"], 2);
        assert_eq!(body["message"], "2 subscriber(s) confirmed.");
        assert_eq!(stores.subscribers.count_active().await.unwrap(), 2);
    }
}
