use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/check", get(handlers::check_propagation))
        .route("/resolvers", get(handlers::get_resolvers))
        .with_state(state)
}
