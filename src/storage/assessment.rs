//! Assessment result storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use crate::traits::AssessmentRecord;
use sqlx::Row;

use super::core::SqliteStorage;

impl SqliteStorage {
    /// Insert a completed assessment result.
    pub(crate) async fn insert_assessment(
        &self,
        record: &AssessmentRecord,
    ) -> Result<(), StorageError> {
        let answers_json =
            serde_json::to_string(&record.answers).map_err(|e| StorageError::Internal {
                message: format!("Failed to serialize answers: {e}"),
            })?;
        let created_at_str = record.created_at.to_rfc3339();

        sqlx::query(
            "INSERT INTO assessment_responses (id, assessment_id, answers, total, severity, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.assessment_id)
        .bind(&answers_json)
        .bind(record.total)
        .bind(&record.severity)
        .bind(&created_at_str)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::query_error("INSERT assessment_responses", format!("{e}")))?;

        Ok(())
    }

    /// Fetch all assessment results, newest first.
    pub async fn fetch_assessments(&self) -> Result<Vec<AssessmentRecord>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, assessment_id, answers, total, severity, created_at
             FROM assessment_responses ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT assessment_responses", format!("{e}")))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.get("id");
            let assessment_id: String = row.get("assessment_id");
            let answers_json: String = row.get("answers");
            let total: i64 = row.get("total");
            let severity: String = row.get("severity");
            let created_at_str: String = row.get("created_at");

            let answers: Vec<i64> =
                serde_json::from_str(&answers_json).map_err(|e| StorageError::Internal {
                    message: format!("Failed to parse answers '{answers_json}': {e}"),
                })?;
            let created_at = Self::parse_datetime(&created_at_str)?;

            records.push(AssessmentRecord {
                id,
                assessment_id,
                answers,
                total,
                severity,
                created_at,
            });
        }

        Ok(records)
    }
}
