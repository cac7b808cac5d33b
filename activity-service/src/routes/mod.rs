use axum::{
    extract::Request,
    middleware,
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
    Router,
};
use log::{info, warn};
use signup_shared::store::{memory::InMemoryActivityStore, ActivityStore};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers::activity_handlers::{get_activities, remove_participant, signup_for_activity};

/// Creates a router backed by a freshly seeded in-memory directory
pub fn create_router(config: &ServiceConfig) -> Router {
    info!("Creating router with in-memory activity store");

    let store = Arc::new(InMemoryActivityStore::seeded());

    create_router_with_store(store, &config.route_prefix, &config.static_dir)
}

/// Creates a router with a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>, prefix: &str, static_dir: &Path) -> Router
where
    S: ActivityStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    // Activity directory routes (require store state)
    let activity_routes = Router::new()
        .route("/activities", get(get_activities::<S>))
        .route("/activities/:name/signup", post(signup_for_activity::<S>))
        .route(
            "/activities/:name/participants",
            delete(remove_participant::<S>),
        )
        .with_state(store);

    // Browser front-end: root redirects to the static index page
    let index_path = format!("{}/static/index.html", prefix);
    info!("Serving static files from {}", static_dir.display());
    let frontend_routes = Router::new()
        .route(
            "/",
            get(move || {
                let index_path = index_path.clone();
                async move { Redirect::to(&index_path) }
            }),
        )
        .nest_service("/static", ServeDir::new(static_dir));

    let app_routes = activity_routes.merge(frontend_routes);

    let router = if prefix.is_empty() {
        app_routes
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    } else {
        Router::new()
            .nest(prefix, app_routes)
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    };

    info!(
        "Router configured with all routes and middleware under prefix: '{}'",
        prefix
    );

    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        AppError::not_found("The requested resource was not found".into()).into_response()
    })
}
