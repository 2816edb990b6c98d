use crate::handlers;
use crate::state::AppState;
use axum::{routing::any, Router};

/// `/` serves the masking page; every other path bounces back to `/`.
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::masked_redirect))
        .fallback(handlers::redirect_to_root)
        .with_state(state)
}
