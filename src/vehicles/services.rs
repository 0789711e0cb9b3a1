use crate::error::ApiError;

/// Plates are compared case-insensitively; store them trimmed and uppercased
/// so the unique index sees one canonical form.
pub fn normalize_plate(raw: &str) -> Result<String, ApiError> {
    let plate = raw.trim().to_uppercase();
    if plate.is_empty() {
        return Err(ApiError::BadRequest("License plate is required".into()));
    }
    if plate.len() > 16 {
        return Err(ApiError::BadRequest("License plate too long".into()));
    }
    Ok(plate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_trims() {
        assert_eq!(normalize_plate("  abc123 ").unwrap(), "ABC123");
        assert_eq!(normalize_plate("XYZ789").unwrap(), "XYZ789");
    }

    #[test]
    fn rejects_empty_plate() {
        assert!(normalize_plate("").is_err());
        assert!(normalize_plate("   ").is_err());
    }

    #[test]
    fn rejects_oversized_plate() {
        assert!(normalize_plate("A".repeat(17).as_str()).is_err());
        assert!(normalize_plate("A".repeat(16).as_str()).is_ok());
    }
}
