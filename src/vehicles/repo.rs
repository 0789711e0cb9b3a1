use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "vehicle_status", rename_all = "lowercase")]
pub enum VehicleStatus {
    Registered,
    Pending,
    Blocked,
}

/// Registered vehicle. The license plate is the business-unique key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub license_plate: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: String,
    pub vehicle_model: String,
    pub vehicle_color: String,
    pub status: VehicleStatus,
    pub registered_by: Uuid,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Insert payload for a new registration.
#[derive(Debug)]
pub struct NewVehicle<'a> {
    pub license_plate: &'a str,
    pub owner_name: &'a str,
    pub owner_email: &'a str,
    pub owner_phone: &'a str,
    pub vehicle_model: &'a str,
    pub vehicle_color: &'a str,
    pub notes: Option<&'a str>,
    pub registered_by: Uuid,
}

impl Vehicle {
    pub async fn find_by_plate(db: &PgPool, plate: &str) -> anyhow::Result<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, license_plate, owner_name, owner_email, owner_phone,
                   vehicle_model, vehicle_color, status, registered_by, notes, created_at
            FROM vehicles
            WHERE license_plate = $1
            "#,
        )
        .bind(plate)
        .fetch_optional(db)
        .await?;
        Ok(vehicle)
    }

    /// Insert with status `registered`.
    pub async fn insert(db: &PgPool, new: NewVehicle<'_>) -> anyhow::Result<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (license_plate, owner_name, owner_email, owner_phone,
                                  vehicle_model, vehicle_color, notes, registered_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, license_plate, owner_name, owner_email, owner_phone,
                      vehicle_model, vehicle_color, status, registered_by, notes, created_at
            "#,
        )
        .bind(new.license_plate)
        .bind(new.owner_name)
        .bind(new.owner_email)
        .bind(new.owner_phone)
        .bind(new.vehicle_model)
        .bind(new.vehicle_color)
        .bind(new.notes)
        .bind(new.registered_by)
        .fetch_one(db)
        .await?;
        Ok(vehicle)
    }

    /// All vehicles, optionally narrowed to one status, in insertion order.
    pub async fn list(db: &PgPool, status: Option<VehicleStatus>) -> anyhow::Result<Vec<Vehicle>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, Vehicle>(
                    r#"
                    SELECT id, license_plate, owner_name, owner_email, owner_phone,
                           vehicle_model, vehicle_color, status, registered_by, notes, created_at
                    FROM vehicles
                    WHERE status = $1
                    ORDER BY created_at
                    "#,
                )
                .bind(status)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Vehicle>(
                    r#"
                    SELECT id, license_plate, owner_name, owner_email, owner_phone,
                           vehicle_model, vehicle_color, status, registered_by, notes, created_at
                    FROM vehicles
                    ORDER BY created_at
                    "#,
                )
                .fetch_all(db)
                .await?
            }
        };
        Ok(rows)
    }

    /// Overwrites status and notes unconditionally; any status may move to any other.
    pub async fn set_status(
        db: &PgPool,
        id: Uuid,
        status: VehicleStatus,
        notes: Option<&str>,
    ) -> anyhow::Result<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET status = $2, notes = $3
            WHERE id = $1
            RETURNING id, license_plate, owner_name, owner_email, owner_phone,
                      vehicle_model, vehicle_color, status, registered_by, notes, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(notes)
        .fetch_optional(db)
        .await?;
        Ok(vehicle)
    }

    pub async fn list_by_owner_email(db: &PgPool, email: &str) -> anyhow::Result<Vec<Vehicle>> {
        let rows = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, license_plate, owner_name, owner_email, owner_phone,
                   vehicle_model, vehicle_color, status, registered_by, notes, created_at
            FROM vehicles
            WHERE owner_email = $1
            ORDER BY created_at
            "#,
        )
        .bind(email)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&VehicleStatus::Registered).unwrap(),
            r#""registered""#
        );
        assert_eq!(
            serde_json::to_string(&VehicleStatus::Blocked).unwrap(),
            r#""blocked""#
        );
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!(serde_json::from_str::<VehicleStatus>(r#""impounded""#).is_err());
        assert!(serde_json::from_str::<VehicleStatus>(r#""REGISTERED""#).is_err());
    }
}
