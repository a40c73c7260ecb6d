//! Course entity model.

use learnhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
