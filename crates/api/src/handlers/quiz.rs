//! Handlers for quiz and final-exam submissions.

use axum::extract::State;
use axum::Json;
use learnhub_core::quiz::score_answers;
use learnhub_core::types::DbId;
use learnhub_db::models::quiz::{CreateQuizAnswer, CreateQuizScore};
use learnhub_db::repositories::QuizScoreRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub selected_index: i32,
    pub is_correct: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub lesson_id: Option<DbId>,
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
    #[serde(default)]
    pub is_final_exam: bool,
    /// Seconds spent on the attempt.
    pub time_taken: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: i32,
    pub passed: bool,
    pub score_id: DbId,
}

/// Lesson the score row points at. Always `None` for the final exam.
fn stored_lesson_id(submission: &QuizSubmission) -> Option<DbId> {
    if submission.is_final_exam {
        None
    } else {
        submission.lesson_id
    }
}

/// POST /api/quiz/submit
///
/// Score the caller's attempt and store it with its answers. The final exam
/// is not tied to a lesson, so `lessonId` is ignored for it.
/// A lesson quiz may omit `lessonId`; the score is then stored unlinked.
pub async fn submit_quiz(
    State(state): State<AppState>,
    user: AuthUser,
    Json(submission): Json<QuizSubmission>,
) -> AppResult<Json<QuizResult>> {
    let lesson_id = stored_lesson_id(&submission);

    let flags: Vec<bool> = submission.answers.iter().map(|a| a.is_correct).collect();
    let outcome = score_answers(&flags)?;

    let input = CreateQuizScore {
        user_id: user.user_id,
        lesson_id,
        is_final_exam: submission.is_final_exam,
        score: outcome.score,
        passed: outcome.passed,
        time_taken_seconds: submission.time_taken,
    };
    let answers: Vec<CreateQuizAnswer> = submission
        .answers
        .into_iter()
        .map(|a| CreateQuizAnswer {
            question_id: a.question_id,
            selected_option_index: a.selected_index,
            is_correct: a.is_correct,
        })
        .collect();

    let record = QuizScoreRepo::create_with_answers(&state.pool, &input, &answers).await?;

    tracing::info!(
        user_id = %user.user_id,
        score_id = %record.id,
        score = outcome.score,
        passed = outcome.passed,
        final_exam = submission.is_final_exam,
        "Quiz submitted",
    );

    Ok(Json(QuizResult {
        score: outcome.score,
        passed: outcome.passed,
        score_id: record.id,
    }))
}
