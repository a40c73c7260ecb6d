//! Postgres-backed [`VideoCatalog`].

use async_trait::async_trait;
use learnhub_core::delivery::{CourseRecord, LessonRecord, VideoCatalog};
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;

use crate::repositories::{CourseRepo, LessonRepo, VideoAssetRepo};
use crate::DbPool;

/// Delivery-path lookups served from the application database.
#[derive(Clone)]
pub struct PgVideoCatalog {
    pool: DbPool,
}

impl PgVideoCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// `RowNotFound` means absence; anything else is a real failure.
fn lookup_error(table: &'static str, err: sqlx::Error) -> Result<(), CoreError> {
    match err {
        sqlx::Error::RowNotFound => Ok(()),
        other => {
            tracing::error!(table, error = %other, "Catalog lookup failed");
            Err(CoreError::Internal(format!("{table} lookup failed: {other}")))
        }
    }
}

#[async_trait]
impl VideoCatalog for PgVideoCatalog {
    async fn video_asset_path(&self, lesson_id: DbId) -> Result<Option<String>, CoreError> {
        match VideoAssetRepo::find_by_lesson(&self.pool, lesson_id).await {
            Ok(asset) => Ok(asset.map(|a| a.video_path)),
            Err(err) => lookup_error("videos", err).map(|()| None),
        }
    }

    async fn find_lesson(&self, lesson_id: DbId) -> Result<Option<LessonRecord>, CoreError> {
        match LessonRepo::find_by_id(&self.pool, lesson_id).await {
            Ok(lesson) => Ok(lesson.map(|l| LessonRecord {
                id: l.id,
                course_id: l.course_id,
                video_url: l.video_url,
            })),
            Err(err) => lookup_error("topics", err).map(|()| None),
        }
    }

    async fn find_course(&self, course_id: DbId) -> Result<Option<CourseRecord>, CoreError> {
        match CourseRepo::find_by_id(&self.pool, course_id).await {
            Ok(course) => Ok(course.map(|c| CourseRecord {
                id: c.id,
                is_published: c.is_published,
            })),
            Err(err) => lookup_error("courses", err).map(|()| None),
        }
    }
}
