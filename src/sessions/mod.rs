use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

mod dto;
pub mod handlers;
pub mod repo;
pub(crate) mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(handlers::start_session))
        .route("/sessions/:id/end", post(handlers::end_session))
        .route("/sessions/active", get(handlers::list_active_sessions))
        .route("/sessions/history", get(handlers::parking_history))
}
