use serde::Deserialize;

/// Request body for opening a parking session.
#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub license_plate: String,
    pub location: String,
    pub notes: Option<String>,
}

/// Request body for closing a session. Notes overwrite whatever was stored.
#[derive(Debug, Default, Deserialize)]
pub struct EndSessionRequest {
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub license_plate: Option<String>,
}
