use serde::Deserialize;

use super::repo::VehicleStatus;

/// Request body for vehicle registration.
#[derive(Debug, Deserialize)]
pub struct RegisterVehicleRequest {
    pub license_plate: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: String,
    pub vehicle_model: String,
    pub vehicle_color: String,
    pub notes: Option<String>,
}

/// Optional status filter for vehicle listing. Unknown values are rejected
/// at the boundary by the closed enum.
#[derive(Debug, Deserialize)]
pub struct VehicleListQuery {
    pub status: Option<VehicleStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: VehicleStatus,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_parses_status() {
        let q: VehicleListQuery = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(q.status, Some(VehicleStatus::Pending));
    }

    #[test]
    fn list_query_rejects_unknown_status() {
        assert!(serde_json::from_str::<VehicleListQuery>(r#"{"status":"towed"}"#).is_err());
    }
}
