//! Enrollment entity model.

use learnhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub created_at: Timestamp,
}
