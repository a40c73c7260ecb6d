//! Video asset entity model and DTOs.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `videos` table. At most one per lesson.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoAsset {
    pub id: DbId,
    pub topic_id: DbId,
    pub title: String,
    /// Object path inside the default video bucket (or a full URL for
    /// externally hosted videos).
    pub video_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lesson together with its video asset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideoLesson {
    pub course_id: DbId,
    pub title: String,
    /// The reference as authored; kept verbatim on the lesson's legacy field.
    pub url: String,
    /// The path stored on the asset row.
    pub video_path: String,
}
