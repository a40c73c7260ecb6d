//! Lesson video reference resolution.
//!
//! The authoritative reference for a lesson comes from its video asset row
//! when one exists, otherwise from the legacy `video_url` field on the lesson
//! itself. The data store is reached through [`VideoCatalog`] so handlers get
//! an injected implementation (Postgres in production, in-memory in tests).

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::DbId;

/// The lesson columns the delivery path needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRecord {
    pub id: DbId,
    pub course_id: DbId,
    pub video_url: Option<String>,
}

/// The course columns the delivery path needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub id: DbId,
    pub is_published: bool,
}

/// Read-only lookups used while delivering a lesson video.
///
/// Absence is reported as `Ok(None)`; `Err` is reserved for genuine
/// data-layer failures.
#[async_trait]
pub trait VideoCatalog: Send + Sync {
    /// Storage path of the lesson's video asset, if an asset row exists.
    async fn video_asset_path(&self, lesson_id: DbId) -> Result<Option<String>, CoreError>;

    /// The lesson (topic) row.
    async fn find_lesson(&self, lesson_id: DbId) -> Result<Option<LessonRecord>, CoreError>;

    /// The owning course row.
    async fn find_course(&self, course_id: DbId) -> Result<Option<CourseRecord>, CoreError>;
}

/// Where a resolved reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSource {
    VideoAsset,
    LegacyField,
}

/// A non-empty video reference string plus its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    pub reference: String,
    pub source: ReferenceSource,
}

/// Resolve the video reference for `lesson_id`.
///
/// Prefers a non-empty asset path over a non-empty legacy field. Returns
/// [`CoreError::NotFound`] with entity `"Video"` when neither exists.
pub async fn resolve_reference(
    catalog: &dyn VideoCatalog,
    lesson_id: DbId,
) -> Result<ResolvedReference, CoreError> {
    if let Some(path) = catalog.video_asset_path(lesson_id).await? {
        if !path.is_empty() {
            return Ok(ResolvedReference {
                reference: path,
                source: ReferenceSource::VideoAsset,
            });
        }
    }

    let legacy = catalog
        .find_lesson(lesson_id)
        .await?
        .and_then(|lesson| lesson.video_url)
        .filter(|url| !url.is_empty());

    match legacy {
        Some(reference) => {
            tracing::debug!(%lesson_id, "No video asset, using legacy video_url");
            Ok(ResolvedReference {
                reference,
                source: ReferenceSource::LegacyField,
            })
        }
        None => Err(CoreError::NotFound {
            entity: "Video",
            id: lesson_id,
        }),
    }
}
