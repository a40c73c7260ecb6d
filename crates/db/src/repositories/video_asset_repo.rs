//! Repository for the `videos` table.

use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::video_asset::VideoAsset;

const COLUMNS: &str = "id, topic_id, title, video_path, created_at, updated_at";

pub struct VideoAssetRepo;

impl VideoAssetRepo {
    /// Find the asset attached to a lesson, if any.
    pub async fn find_by_lesson(
        pool: &PgPool,
        lesson_id: DbId,
    ) -> Result<Option<VideoAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE topic_id = $1");
        sqlx::query_as::<_, VideoAsset>(&query)
            .bind(lesson_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an asset row using any executor (pool or open transaction).
    pub async fn create<'e, E>(
        executor: E,
        lesson_id: DbId,
        title: &str,
        video_path: &str,
    ) -> Result<VideoAsset, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO videos (topic_id, title, video_path)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoAsset>(&query)
            .bind(lesson_id)
            .bind(title)
            .bind(video_path)
            .fetch_one(executor)
            .await
    }
}
