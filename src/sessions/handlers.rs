use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{EndSessionRequest, HistoryQuery, StartSessionRequest};
use super::repo::ParkingSession;
use super::services::validate_start;
use crate::auth::Staff;
use crate::error::ApiError;
use crate::state::AppState;
use crate::vehicles::repo::Vehicle;
use crate::vehicles::services::normalize_plate;

const HISTORY_LIMIT: i64 = 50;

#[instrument(skip(state, staff, payload), fields(staff_id = %staff.id))]
pub async fn start_session(
    State(state): State<AppState>,
    Staff(staff): Staff,
    Json(payload): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<ParkingSession>), ApiError> {
    let plate = normalize_plate(&payload.license_plate)?;
    if payload.location.trim().is_empty() {
        return Err(ApiError::BadRequest("Location is required".into()));
    }

    let vehicle = Vehicle::find_by_plate(&state.db, &plate).await?;
    let active = ParkingSession::find_active_by_plate(&state.db, &plate).await?;
    let vehicle = validate_start(vehicle, active.as_ref())?;

    let session = ParkingSession::insert(
        &state.db,
        vehicle.id,
        &plate,
        payload.location.trim(),
        staff.id,
        payload.notes.as_deref(),
    )
    .await?;

    info!(session_id = %session.id, plate = %plate, location = %session.location, "session started");
    Ok((StatusCode::CREATED, Json(session)))
}

#[instrument(skip(state, staff, payload), fields(staff_id = %staff.id))]
pub async fn end_session(
    State(state): State<AppState>,
    Staff(staff): Staff,
    Path(id): Path<Uuid>,
    Json(payload): Json<EndSessionRequest>,
) -> Result<Json<ParkingSession>, ApiError> {
    let session = ParkingSession::end(&state.db, id, payload.notes.as_deref())
        .await?
        .ok_or(ApiError::NotFound("session"))?;

    info!(session_id = %session.id, plate = %session.license_plate, "session ended");
    Ok(Json(session))
}

#[instrument(skip(state, _staff))]
pub async fn list_active_sessions(
    State(state): State<AppState>,
    Staff(_staff): Staff,
) -> Result<Json<Vec<ParkingSession>>, ApiError> {
    let sessions = ParkingSession::list_active(&state.db).await?;
    Ok(Json(sessions))
}

#[instrument(skip(state, _staff))]
pub async fn parking_history(
    State(state): State<AppState>,
    Staff(_staff): Staff,
    Query(q): Query<HistoryQuery>,
) -> Result<Json<Vec<ParkingSession>>, ApiError> {
    let plate = match q.license_plate.as_deref() {
        Some(raw) => Some(normalize_plate(raw)?),
        None => None,
    };
    let sessions = ParkingSession::history(&state.db, plate.as_deref(), HISTORY_LIMIT).await?;
    Ok(Json(sessions))
}
