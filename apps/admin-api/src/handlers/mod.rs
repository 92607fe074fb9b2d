//! HTTP handlers and route configuration.

mod comments;
mod dashboard;
mod health;
mod posts;
mod subscribers;

use actix_web::{HttpResponse, web};
use quill_shared::{ApiResponse, BatchActionResponse};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/dashboard", web::get().to(dashboard::summary))
            // Batch routes come first so `batch` is never read as an id.
            .service(
                web::scope("/posts")
                    .route("/batch/{action}", web::post().to(posts::batch))
                    .route("/{id}", web::get().to(posts::show))
                    .route("/{id}/{action}", web::post().to(posts::apply)),
            )
            .service(
                web::scope("/comments")
                    .route("/batch/{action}", web::post().to(comments::batch))
                    .route("/{id}", web::get().to(comments::show))
                    .route("/{id}/{action}", web::post().to(comments::apply)),
            )
            .service(
                web::scope("/subscribers")
                    .route("/batch/{action}", web::post().to(subscribers::batch))
                    .route("/{id}", web::get().to(subscribers::show))
                    .route("/{id}/{action}", web::post().to(subscribers::apply)),
            ),
    );
}

/// Response for a finished bulk action, e.g. `3 comment(s) approved.`
fn batch_reply(noun: &str, action: &str, past_tense: &str, changed: usize) -> HttpResponse {
    let data = BatchActionResponse::new(action, changed);
    let message = data.summary(noun, past_tense);
    HttpResponse::Ok().json(ApiResponse::ok_with_message(data, message))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::{App, web};
    use quill_core::lifecycle::TransitionPolicy;
    use quill_infra::{
        InMemoryCommentRepository, InMemoryPostRepository, InMemorySubscriberRepository,
        PostSlugHook,
    };

    use crate::state::AppState;

    pub struct Stores {
        pub posts: Arc<InMemoryPostRepository>,
        pub comments: Arc<InMemoryCommentRepository>,
        pub subscribers: Arc<InMemorySubscriberRepository>,
    }

    impl Stores {
        pub fn new() -> Self {
            Self {
                posts: Arc::new(InMemoryPostRepository::new().with_hook(Arc::new(PostSlugHook))),
                comments: Arc::new(InMemoryCommentRepository::new()),
                subscribers: Arc::new(InMemorySubscriberRepository::new()),
            }
        }

        pub fn state(&self, policy: TransitionPolicy) -> AppState {
            AppState::with_stores(
                self.posts.clone(),
                self.comments.clone(),
                self.subscribers.clone(),
                policy,
            )
        }
    }

    pub fn app(
        state: AppState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .configure(super::configure_routes)
    }
}
