use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{ReportViolationRequest, ViolationListQuery};
use super::repo::Violation;
use crate::auth::Staff;
use crate::error::ApiError;
use crate::state::AppState;
use crate::vehicles::repo::Vehicle;
use crate::vehicles::services::normalize_plate;

#[instrument(skip(state, staff, payload), fields(staff_id = %staff.id))]
pub async fn report_violation(
    State(state): State<AppState>,
    Staff(staff): Staff,
    Json(payload): Json<ReportViolationRequest>,
) -> Result<(StatusCode, Json<Violation>), ApiError> {
    let plate = normalize_plate(&payload.license_plate)?;
    if payload.violation_type.trim().is_empty() {
        return Err(ApiError::BadRequest("Violation type is required".into()));
    }

    // Best-effort match; an unknown plate still gets a report.
    let vehicle = Vehicle::find_by_plate(&state.db, &plate).await?;

    let violation = Violation::insert(
        &state.db,
        vehicle.map(|v| v.id),
        &plate,
        payload.violation_type.trim(),
        &payload.description,
        &payload.location,
        staff.id,
    )
    .await?;

    info!(
        violation_id = %violation.id,
        plate = %plate,
        violation_type = %violation.violation_type,
        matched = violation.vehicle_id.is_some(),
        "violation reported"
    );
    Ok((StatusCode::CREATED, Json(violation)))
}

#[instrument(skip(state, _staff))]
pub async fn list_violations(
    State(state): State<AppState>,
    Staff(_staff): Staff,
    Query(q): Query<ViolationListQuery>,
) -> Result<Json<Vec<Violation>>, ApiError> {
    let violations = Violation::list(&state.db, q.resolved).await?;
    Ok(Json(violations))
}

#[instrument(skip(state, staff), fields(staff_id = %staff.id))]
pub async fn resolve_violation(
    State(state): State<AppState>,
    Staff(staff): Staff,
    Path(id): Path<Uuid>,
) -> Result<Json<Violation>, ApiError> {
    let violation = Violation::resolve(&state.db, id, staff.id)
        .await?
        .ok_or(ApiError::NotFound("violation"))?;

    info!(violation_id = %violation.id, "violation resolved");
    Ok(Json(violation))
}
