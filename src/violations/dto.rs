use serde::Deserialize;

/// Request body for reporting a violation. The plate does not have to belong
/// to a registered vehicle.
#[derive(Debug, Deserialize)]
pub struct ReportViolationRequest {
    pub license_plate: String,
    pub violation_type: String,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct ViolationListQuery {
    pub resolved: Option<bool>,
}
