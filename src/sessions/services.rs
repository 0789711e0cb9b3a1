use super::repo::ParkingSession;
use crate::error::ApiError;
use crate::vehicles::repo::{Vehicle, VehicleStatus};

/// The start-session check sequence. Each failure is distinct and checked in
/// order: unknown plate, blocked vehicle, already-open session. All reads
/// happen before the insert; the store's unique active-per-plate index covers
/// the race this read-then-write sequence cannot see.
pub fn validate_start(
    vehicle: Option<Vehicle>,
    active: Option<&ParkingSession>,
) -> Result<Vehicle, ApiError> {
    let vehicle = vehicle.ok_or(ApiError::VehicleNotRegistered)?;

    if vehicle.status == VehicleStatus::Blocked {
        return Err(ApiError::VehicleBlocked);
    }

    if active.is_some() {
        return Err(ApiError::SessionAlreadyActive);
    }

    Ok(vehicle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::repo::SessionStatus;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn vehicle(status: VehicleStatus) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            license_plate: "ABC123".into(),
            owner_name: "John Doe".into(),
            owner_email: "john@example.com".into(),
            owner_phone: "+1234567890".into(),
            vehicle_model: "Toyota Camry".into(),
            vehicle_color: "Blue".into(),
            status,
            registered_by: Uuid::new_v4(),
            notes: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn active_session(plate: &str) -> ParkingSession {
        ParkingSession {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            license_plate: plate.into(),
            entry_time: OffsetDateTime::now_utc(),
            exit_time: None,
            status: SessionStatus::Active,
            location: "Zone A".into(),
            staff_id: Some(Uuid::new_v4()),
            notes: None,
        }
    }

    #[test]
    fn unknown_plate_is_rejected_first() {
        let err = validate_start(None, None).unwrap_err();
        assert!(matches!(err, ApiError::VehicleNotRegistered));

        // even with a stale active session, the missing vehicle wins
        let session = active_session("ABC123");
        let err = validate_start(None, Some(&session)).unwrap_err();
        assert!(matches!(err, ApiError::VehicleNotRegistered));
    }

    #[test]
    fn blocked_vehicle_is_rejected() {
        let err = validate_start(Some(vehicle(VehicleStatus::Blocked)), None).unwrap_err();
        assert!(matches!(err, ApiError::VehicleBlocked));
    }

    #[test]
    fn blocked_takes_precedence_over_active_session() {
        let session = active_session("ABC123");
        let err =
            validate_start(Some(vehicle(VehicleStatus::Blocked)), Some(&session)).unwrap_err();
        assert!(matches!(err, ApiError::VehicleBlocked));
    }

    #[test]
    fn open_session_is_rejected() {
        let session = active_session("ABC123");
        let err =
            validate_start(Some(vehicle(VehicleStatus::Registered)), Some(&session)).unwrap_err();
        assert!(matches!(err, ApiError::SessionAlreadyActive));
    }

    #[test]
    fn registered_and_pending_vehicles_may_start() {
        assert!(validate_start(Some(vehicle(VehicleStatus::Registered)), None).is_ok());
        assert!(validate_start(Some(vehicle(VehicleStatus::Pending)), None).is_ok());
    }
}
