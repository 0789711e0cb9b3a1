use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/violations",
            post(handlers::report_violation).get(handlers::list_violations),
        )
        .route("/violations/:id/resolve", post(handlers::resolve_violation))
}
