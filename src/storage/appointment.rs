//! Appointment storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use crate::traits::Appointment;
use sqlx::Row;

use super::core::SqliteStorage;

impl SqliteStorage {
    /// Insert an appointment request.
    pub(crate) async fn insert_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<(), StorageError> {
        let scheduled_at_str = appointment.scheduled_at.to_rfc3339();
        let created_at_str = appointment.created_at.to_rfc3339();

        sqlx::query(
            "INSERT INTO appointments (id, counselor_name, scheduled_at, reason, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&appointment.id)
        .bind(&appointment.counselor_name)
        .bind(&scheduled_at_str)
        .bind(&appointment.reason)
        .bind(&created_at_str)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::query_error("INSERT appointments", format!("{e}")))?;

        Ok(())
    }

    /// Fetch all appointments, soonest first.
    pub(crate) async fn fetch_appointments(&self) -> Result<Vec<Appointment>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, counselor_name, scheduled_at, reason, created_at
             FROM appointments ORDER BY scheduled_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT appointments", format!("{e}")))?;

        let mut appointments = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.get("id");
            let counselor_name: String = row.get("counselor_name");
            let scheduled_at_str: String = row.get("scheduled_at");
            let reason: Option<String> = row.get("reason");
            let created_at_str: String = row.get("created_at");

            let scheduled_at = Self::parse_datetime(&scheduled_at_str)?;
            let created_at = Self::parse_datetime(&created_at_str)?;

            appointments.push(Appointment {
                id,
                counselor_name,
                scheduled_at,
                reason,
                created_at,
            });
        }

        Ok(appointments)
    }
}
