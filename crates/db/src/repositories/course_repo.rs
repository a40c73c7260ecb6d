//! Repository for the `courses` table.

use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::Course;

const COLUMNS: &str = "id, title, description, is_published, created_at, updated_at";

pub struct CourseRepo;

impl CourseRepo {
    /// Find a course by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a course with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM courses WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
