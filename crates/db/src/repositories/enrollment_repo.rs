//! Repository for the `enrollments` table.

use learnhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::Enrollment;

const COLUMNS: &str = "id, user_id, course_id, created_at";

pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a user in a course.
    ///
    /// A second enrollment for the same pair violates
    /// `uq_enrollments_user_course`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (user_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// List a user's enrollments, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
