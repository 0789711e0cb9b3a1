use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Staff-reported infraction. `vehicle_id` is a best-effort link: a report
/// may name a plate with no registered vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Violation {
    pub id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub license_plate: String,
    pub violation_type: String,
    pub description: String,
    pub location: String,
    pub reported_by: Uuid,
    pub resolved: bool,
    pub resolved_by: Option<Uuid>,
    pub resolved_at: Option<OffsetDateTime>,
    pub reported_at: OffsetDateTime,
}

impl Violation {
    pub async fn insert(
        db: &PgPool,
        vehicle_id: Option<Uuid>,
        plate: &str,
        violation_type: &str,
        description: &str,
        location: &str,
        reported_by: Uuid,
    ) -> anyhow::Result<Violation> {
        let violation = sqlx::query_as::<_, Violation>(
            r#"
            INSERT INTO violations (vehicle_id, license_plate, violation_type,
                                    description, location, reported_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, vehicle_id, license_plate, violation_type, description,
                      location, reported_by, resolved, resolved_by, resolved_at, reported_at
            "#,
        )
        .bind(vehicle_id)
        .bind(plate)
        .bind(violation_type)
        .bind(description)
        .bind(location)
        .bind(reported_by)
        .fetch_one(db)
        .await?;
        Ok(violation)
    }

    /// Newest first, optionally filtered by resolved flag.
    pub async fn list(db: &PgPool, resolved: Option<bool>) -> anyhow::Result<Vec<Violation>> {
        let rows = match resolved {
            Some(resolved) => {
                sqlx::query_as::<_, Violation>(
                    r#"
                    SELECT id, vehicle_id, license_plate, violation_type, description,
                           location, reported_by, resolved, resolved_by, resolved_at, reported_at
                    FROM violations
                    WHERE resolved = $1
                    ORDER BY reported_at DESC
                    "#,
                )
                .bind(resolved)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Violation>(
                    r#"
                    SELECT id, vehicle_id, license_plate, violation_type, description,
                           location, reported_by, resolved, resolved_by, resolved_at, reported_at
                    FROM violations
                    ORDER BY reported_at DESC
                    "#,
                )
                .fetch_all(db)
                .await?
            }
        };
        Ok(rows)
    }

    /// Marks resolved unconditionally; resolving twice just overwrites the
    /// resolver and timestamp.
    pub async fn resolve(
        db: &PgPool,
        id: Uuid,
        resolved_by: Uuid,
    ) -> anyhow::Result<Option<Violation>> {
        let violation = sqlx::query_as::<_, Violation>(
            r#"
            UPDATE violations
            SET resolved = TRUE, resolved_by = $2, resolved_at = now()
            WHERE id = $1
            RETURNING id, vehicle_id, license_plate, violation_type, description,
                      location, reported_by, resolved, resolved_by, resolved_at, reported_at
            "#,
        )
        .bind(id)
        .bind(resolved_by)
        .fetch_optional(db)
        .await?;
        Ok(violation)
    }
}
