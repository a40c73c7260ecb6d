//! Repository for the `topics` (lesson) table.

use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::lesson::{CreateLesson, Lesson};
use crate::models::video_asset::{CreateVideoLesson, VideoAsset};
use crate::repositories::VideoAssetRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_id, order_index, title, description, \
    video_url, video_duration_seconds, created_at, updated_at";

pub struct LessonRepo;

impl LessonRepo {
    /// Find a lesson by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a course's lessons in display order.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Lesson>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM topics WHERE course_id = $1 ORDER BY order_index, created_at");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// The 1-based position a new lesson appended to `course_id` gets.
    pub async fn next_order_index<'e, E>(executor: E, course_id: DbId) -> Result<i32, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM topics WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(executor)
            .await?;
        Ok(count as i32 + 1)
    }

    /// Insert a lesson at the end of its course, or replace the lesson with
    /// `input.id` if it already exists. A replaced lesson keeps its position.
    pub async fn upsert(pool: &PgPool, input: &CreateLesson) -> Result<Lesson, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let order_index = Self::next_order_index(&mut *tx, input.course_id).await?;

        let query = format!(
            "INSERT INTO topics
                (id, course_id, order_index, title, description, video_url, video_duration_seconds)
             VALUES (COALESCE($1, gen_random_uuid()), $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO UPDATE SET
                course_id = EXCLUDED.course_id,
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                video_url = EXCLUDED.video_url,
                video_duration_seconds = EXCLUDED.video_duration_seconds,
                updated_at = now()
             RETURNING {COLUMNS}"
        );
        let lesson = sqlx::query_as::<_, Lesson>(&query)
            .bind(input.id)
            .bind(input.course_id)
            .bind(order_index)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video_url)
            .bind(input.video_duration_seconds)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(lesson)
    }

    /// Create a lesson and its video asset atomically.
    ///
    /// Either both rows exist afterwards or neither does.
    pub async fn create_with_video(
        pool: &PgPool,
        input: &CreateVideoLesson,
    ) -> Result<(Lesson, VideoAsset), sqlx::Error> {
        let mut tx = pool.begin().await?;
        let order_index = Self::next_order_index(&mut *tx, input.course_id).await?;

        let query = format!(
            "INSERT INTO topics (course_id, order_index, title, video_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let lesson = sqlx::query_as::<_, Lesson>(&query)
            .bind(input.course_id)
            .bind(order_index)
            .bind(&input.title)
            .bind(&input.url)
            .fetch_one(&mut *tx)
            .await?;

        let asset =
            VideoAssetRepo::create(&mut *tx, lesson.id, &input.title, &input.video_path).await?;

        tx.commit().await?;
        Ok((lesson, asset))
    }
}
