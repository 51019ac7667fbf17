use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/count", post(handlers::count))
        .route("/tasks/sample", post(handlers::load_sample))
        .route("/tasks/process", post(handlers::process))
        .route("/tasks/export", get(handlers::export))
        .route("/tasks/clear", post(handlers::clear))
        .route("/tasks/reload", post(handlers::reload))
        .with_state(state)
}
