//! Lesson (topic) entity model and DTOs.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `topics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub course_id: DbId,
    pub order_index: i32,
    pub title: String,
    pub description: Option<String>,
    /// Legacy inline video reference; superseded by a `videos` row when one
    /// exists.
    pub video_url: Option<String>,
    pub video_duration_seconds: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a lesson.
///
/// When `id` is set the write is an upsert on that id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLesson {
    pub id: Option<DbId>,
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub video_duration_seconds: Option<i32>,
}
