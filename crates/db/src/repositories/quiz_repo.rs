//! Repository for the `quiz_scores` and `quiz_answers` tables.

use sqlx::PgPool;

use crate::models::quiz::{CreateQuizAnswer, CreateQuizScore, QuizScore};

const COLUMNS: &str = "id, user_id, lesson_id, is_final_exam, score, passed, \
    time_taken_seconds, created_at";

pub struct QuizScoreRepo;

impl QuizScoreRepo {
    /// Record a scored attempt and its individual answers in one
    /// transaction.
    pub async fn create_with_answers(
        pool: &PgPool,
        input: &CreateQuizScore,
        answers: &[CreateQuizAnswer],
    ) -> Result<QuizScore, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO quiz_scores
                (user_id, lesson_id, is_final_exam, score, passed, time_taken_seconds)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let score = sqlx::query_as::<_, QuizScore>(&query)
            .bind(input.user_id)
            .bind(input.lesson_id)
            .bind(input.is_final_exam)
            .bind(input.score)
            .bind(input.passed)
            .bind(input.time_taken_seconds)
            .fetch_one(&mut *tx)
            .await?;

        for answer in answers {
            sqlx::query(
                "INSERT INTO quiz_answers (score_id, question_id, selected_option_index, is_correct)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(score.id)
            .bind(&answer.question_id)
            .bind(answer.selected_option_index)
            .bind(answer.is_correct)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(score)
    }
}
