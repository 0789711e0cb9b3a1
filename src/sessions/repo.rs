use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// `violation` exists in the schema but no operation sets it; flagging
/// overstayed sessions automatically was never wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "session_status", rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
    Violation,
}

/// Parking occupancy record, bounded by entry and optional exit timestamps.
/// The plate is denormalized so session lookups never join vehicles.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParkingSession {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub license_plate: String,
    pub entry_time: OffsetDateTime,
    pub exit_time: Option<OffsetDateTime>,
    pub status: SessionStatus,
    pub location: String,
    pub staff_id: Option<Uuid>,
    pub notes: Option<String>,
}

impl ParkingSession {
    pub async fn find_active_by_plate(
        db: &PgPool,
        plate: &str,
    ) -> anyhow::Result<Option<ParkingSession>> {
        let session = sqlx::query_as::<_, ParkingSession>(
            r#"
            SELECT id, vehicle_id, license_plate, entry_time, exit_time,
                   status, location, staff_id, notes
            FROM parking_sessions
            WHERE license_plate = $1 AND status = 'active'
            "#,
        )
        .bind(plate)
        .fetch_optional(db)
        .await?;
        Ok(session)
    }

    /// Open a session: status `active`, entry time now.
    pub async fn insert(
        db: &PgPool,
        vehicle_id: Uuid,
        plate: &str,
        location: &str,
        staff_id: Uuid,
        notes: Option<&str>,
    ) -> anyhow::Result<ParkingSession> {
        let session = sqlx::query_as::<_, ParkingSession>(
            r#"
            INSERT INTO parking_sessions (vehicle_id, license_plate, location, staff_id, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, vehicle_id, license_plate, entry_time, exit_time,
                      status, location, staff_id, notes
            "#,
        )
        .bind(vehicle_id)
        .bind(plate)
        .bind(location)
        .bind(staff_id)
        .bind(notes)
        .fetch_one(db)
        .await?;
        Ok(session)
    }

    /// Close a session unconditionally: exit time now, status `completed`,
    /// notes overwritten. Ending an already-completed session is accepted.
    pub async fn end(
        db: &PgPool,
        id: Uuid,
        notes: Option<&str>,
    ) -> anyhow::Result<Option<ParkingSession>> {
        let session = sqlx::query_as::<_, ParkingSession>(
            r#"
            UPDATE parking_sessions
            SET exit_time = now(), status = 'completed', notes = $2
            WHERE id = $1
            RETURNING id, vehicle_id, license_plate, entry_time, exit_time,
                      status, location, staff_id, notes
            "#,
        )
        .bind(id)
        .bind(notes)
        .fetch_optional(db)
        .await?;
        Ok(session)
    }

    pub async fn list_active(db: &PgPool) -> anyhow::Result<Vec<ParkingSession>> {
        let rows = sqlx::query_as::<_, ParkingSession>(
            r#"
            SELECT id, vehicle_id, license_plate, entry_time, exit_time,
                   status, location, staff_id, notes
            FROM parking_sessions
            WHERE status = 'active'
            ORDER BY entry_time
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Most recent sessions first, optionally narrowed to one plate.
    pub async fn history(
        db: &PgPool,
        plate: Option<&str>,
        limit: i64,
    ) -> anyhow::Result<Vec<ParkingSession>> {
        let rows = match plate {
            Some(plate) => {
                sqlx::query_as::<_, ParkingSession>(
                    r#"
                    SELECT id, vehicle_id, license_plate, entry_time, exit_time,
                           status, location, staff_id, notes
                    FROM parking_sessions
                    WHERE license_plate = $1
                    ORDER BY entry_time DESC
                    LIMIT $2
                    "#,
                )
                .bind(plate)
                .bind(limit)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, ParkingSession>(
                    r#"
                    SELECT id, vehicle_id, license_plate, entry_time, exit_time,
                           status, location, staff_id, notes
                    FROM parking_sessions
                    ORDER BY entry_time DESC
                    LIMIT $1
                    "#,
                )
                .bind(limit)
                .fetch_all(db)
                .await?
            }
        };
        Ok(rows)
    }

    /// History restricted to vehicles owned by the given email.
    pub async fn list_for_owner_email(
        db: &PgPool,
        email: &str,
        limit: i64,
    ) -> anyhow::Result<Vec<ParkingSession>> {
        let rows = sqlx::query_as::<_, ParkingSession>(
            r#"
            SELECT s.id, s.vehicle_id, s.license_plate, s.entry_time, s.exit_time,
                   s.status, s.location, s.staff_id, s.notes
            FROM parking_sessions s
            JOIN vehicles v ON v.id = s.vehicle_id
            WHERE v.owner_email = $1
            ORDER BY s.entry_time DESC
            LIMIT $2
            "#,
        )
        .bind(email)
        .bind(limit)
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
            serde_json::to_string(&SessionStatus::Active).unwrap(),
            r#""active""#
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::Violation).unwrap(),
            r#""violation""#
        );
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!(serde_json::from_str::<SessionStatus>(r#""expired""#).is_err());
    }
}
