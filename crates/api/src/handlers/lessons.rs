//! Handlers for lesson authoring.
//!
//! Lessons are appended to their course (`order_index = count + 1`).
//! `POST /videos` creates the lesson and its video asset in one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use learnhub_core::types::DbId;
use learnhub_core::video_ref::storage_object_path;
use learnhub_db::models::lesson::{CreateLesson, Lesson};
use learnhub_db::models::video_asset::CreateVideoLesson;
use learnhub_db::repositories::LessonRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /lessons`.
///
/// Every field is optional at the wire level so missing values produce a
/// descriptive 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LessonRequest {
    pub id: Option<DbId>,
    pub course_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    /// Duration in seconds.
    pub duration: Option<i32>,
}

/// Request body for `POST /videos`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoLessonRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub course_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct VideoLessonCreated {
    pub message: &'static str,
    pub data: Lesson,
}

/// Trimmed, non-empty string or `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl LessonRequest {
    fn into_create(self) -> AppResult<CreateLesson> {
        let (Some(course_id), Some(title)) = (self.course_id, non_blank(self.title)) else {
            return Err(AppError::BadRequest(
                "Missing required fields: course_id, title".into(),
            ));
        };

        Ok(CreateLesson {
            id: self.id,
            course_id,
            title,
            description: self.description,
            video_url: non_blank(self.video_url),
            video_duration_seconds: self.duration,
        })
    }
}

impl VideoLessonRequest {
    fn into_create(self) -> AppResult<CreateVideoLesson> {
        let (Some(title), Some(url), Some(course_id)) =
            (non_blank(self.title), non_blank(self.url), self.course_id)
        else {
            return Err(AppError::BadRequest(
                "Missing required fields: title, url, courseId".into(),
            ));
        };

        let video_path = storage_object_path(&url);
        Ok(CreateVideoLesson {
            course_id,
            title,
            url,
            video_path,
        })
    }
}

/// POST /api/lessons
///
/// Create a lesson at the end of its course, or replace the lesson with the
/// given `id`.
pub async fn create_lesson(
    State(state): State<AppState>,
    Json(input): Json<LessonRequest>,
) -> AppResult<Json<Lesson>> {
    let input = input.into_create()?;
    let lesson = LessonRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        lesson_id = %lesson.id,
        course_id = %lesson.course_id,
        order_index = lesson.order_index,
        "Lesson saved",
    );
    Ok(Json(lesson))
}

/// GET /api/lessons/course/{id}
pub async fn list_course_lessons(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<Lesson>>> {
    let lessons = LessonRepo::list_by_course(&state.pool, course_id).await?;
    tracing::debug!(%course_id, count = lessons.len(), "Listed course lessons");
    Ok(Json(lessons))
}

/// POST /api/videos
///
/// Create a lesson together with its video asset. The asset stores the bare
/// object path when `url` is a storage URL, otherwise `url` verbatim.
pub async fn create_video_lesson(
    State(state): State<AppState>,
    Json(input): Json<VideoLessonRequest>,
) -> AppResult<(StatusCode, Json<VideoLessonCreated>)> {
    let input = input.into_create()?;
    let (lesson, asset) = LessonRepo::create_with_video(&state.pool, &input).await?;

    tracing::info!(
        lesson_id = %lesson.id,
        asset_id = %asset.id,
        video_path = %asset.video_path,
        "Video lesson created",
    );

    Ok((
        StatusCode::CREATED,
        Json(VideoLessonCreated {
            message: "Video created successfully",
            data: lesson,
        }),
    ))
}
