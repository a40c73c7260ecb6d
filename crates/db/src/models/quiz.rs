//! Quiz score and answer models and DTOs.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `quiz_scores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuizScore {
    pub id: DbId,
    pub user_id: DbId,
    /// `None` for the final exam.
    pub lesson_id: Option<DbId>,
    pub is_final_exam: bool,
    pub score: i32,
    pub passed: bool,
    pub time_taken_seconds: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for recording a scored attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuizScore {
    pub user_id: DbId,
    pub lesson_id: Option<DbId>,
    pub is_final_exam: bool,
    pub score: i32,
    pub passed: bool,
    pub time_taken_seconds: Option<i32>,
}

/// DTO for one answered question within an attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuizAnswer {
    pub question_id: String,
    pub selected_option_index: i32,
    pub is_correct: bool,
}
