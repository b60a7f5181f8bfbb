use crate::server::handlers;
use crate::server::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/label_search", get(handlers::label_search))
        .route("/conceptual_search", get(handlers::conceptual_search))
        .route("/dilemmas", post(handlers::dilemmas))
        .route("/get_problem", get(handlers::get_problem))
        .route("/destination", post(handlers::destination))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
