use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{RegisterVehicleRequest, UpdateStatusRequest, VehicleListQuery};
use super::repo::{NewVehicle, Vehicle};
use super::services::normalize_plate;
use crate::auth::handlers::is_valid_email;
use crate::auth::Staff;
use crate::error::ApiError;
use crate::state::AppState;

#[instrument(skip(state, staff, payload), fields(staff_id = %staff.id))]
pub async fn register_vehicle(
    State(state): State<AppState>,
    Staff(staff): Staff,
    Json(payload): Json<RegisterVehicleRequest>,
) -> Result<(StatusCode, Json<Vehicle>), ApiError> {
    let plate = normalize_plate(&payload.license_plate)?;

    let owner_email = payload.owner_email.trim().to_lowercase();
    if !is_valid_email(&owner_email) {
        warn!(email = %owner_email, "invalid owner email");
        return Err(ApiError::BadRequest("Invalid owner email".into()));
    }

    if Vehicle::find_by_plate(&state.db, &plate).await?.is_some() {
        warn!(plate = %plate, "duplicate registration attempt");
        return Err(ApiError::DuplicatePlate);
    }

    let vehicle = Vehicle::insert(
        &state.db,
        NewVehicle {
            license_plate: &plate,
            owner_name: &payload.owner_name,
            owner_email: &owner_email,
            owner_phone: &payload.owner_phone,
            vehicle_model: &payload.vehicle_model,
            vehicle_color: &payload.vehicle_color,
            notes: payload.notes.as_deref(),
            registered_by: staff.id,
        },
    )
    .await?;

    info!(vehicle_id = %vehicle.id, plate = %vehicle.license_plate, "vehicle registered");
    Ok((StatusCode::CREATED, Json(vehicle)))
}

#[instrument(skip(state, _staff))]
pub async fn list_vehicles(
    State(state): State<AppState>,
    Staff(_staff): Staff,
    Query(q): Query<VehicleListQuery>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let vehicles = Vehicle::list(&state.db, q.status).await?;
    Ok(Json(vehicles))
}

/// Returns the vehicle for an exact plate, or `null` when none is registered.
#[instrument(skip(state, _staff))]
pub async fn search_vehicle(
    State(state): State<AppState>,
    Staff(_staff): Staff,
    Path(plate): Path<String>,
) -> Result<Json<Option<Vehicle>>, ApiError> {
    let plate = normalize_plate(&plate)?;
    let vehicle = Vehicle::find_by_plate(&state.db, &plate).await?;
    Ok(Json(vehicle))
}

#[instrument(skip(state, staff, payload), fields(staff_id = %staff.id))]
pub async fn update_vehicle_status(
    State(state): State<AppState>,
    Staff(staff): Staff,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = Vehicle::set_status(&state.db, id, payload.status, payload.notes.as_deref())
        .await?
        .ok_or(ApiError::NotFound("vehicle"))?;

    info!(vehicle_id = %vehicle.id, status = ?vehicle.status, "vehicle status updated");
    Ok(Json(vehicle))
}
