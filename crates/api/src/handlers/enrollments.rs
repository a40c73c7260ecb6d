//! Handlers for the `/enrollments` resource.

use axum::extract::State;
use axum::Json;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::enrollment::Enrollment;
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: Option<DbId>,
}

/// POST /api/enrollments
///
/// Enroll the caller in a course. Returns 404 if the course does not exist
/// and 409 if the caller is already enrolled.
pub async fn create_enrollment(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<EnrollRequest>,
) -> AppResult<Json<Enrollment>> {
    let course_id = input
        .course_id
        .ok_or_else(|| AppError::BadRequest("Missing required field: courseId".into()))?;

    if !CourseRepo::exists(&state.pool, course_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }));
    }

    let enrollment = EnrollmentRepo::create(&state.pool, user.user_id, course_id).await?;
    tracing::info!(user_id = %user.user_id, %course_id, "User enrolled");
    Ok(Json(enrollment))
}

/// GET /api/enrollments
///
/// List the caller's enrollments, newest first.
pub async fn list_enrollments(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Enrollment>>>> {
    let enrollments = EnrollmentRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: enrollments }))
}
