use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

mod dto;
pub mod handlers;
pub mod repo;
pub(crate) mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/vehicles",
            post(handlers::register_vehicle).get(handlers::list_vehicles),
        )
        .route("/vehicles/:plate", get(handlers::search_vehicle))
        .route(
            "/vehicles/:id/status",
            patch(handlers::update_vehicle_status),
        )
}
