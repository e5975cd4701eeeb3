//! HTTP router assembly.
//!
//! All application endpoints sit under `/api/` behind the rate-limit
//! middleware. The health probe is mounted outside `/api/` so load
//! balancers are never throttled.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::rate;
use super::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/chat", post(handlers::chat::send))
        .route("/assessments", get(handlers::assessments::list))
        .route("/assessments/:id", get(handlers::assessments::detail))
        .route("/assessments/:id/score", post(handlers::assessments::score))
        .route(
            "/mood",
            post(handlers::wellness::record_mood).get(handlers::wellness::list_moods),
        )
        .route(
            "/journal",
            post(handlers::wellness::record_journal).get(handlers::wellness::list_journal),
        )
        .route(
            "/appointments",
            post(handlers::appointments::book).get(handlers::appointments::list),
        )
        .route("/resources", get(handlers::resources::list))
        .with_state(state.clone())
        .layer(axum::middleware::from_fn_with_state(state, rate::limit));

    Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health::check))
        .layer(TraceLayer::new_for_http())
}
