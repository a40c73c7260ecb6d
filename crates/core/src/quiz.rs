//! Quiz and final-exam scoring.

use crate::error::CoreError;

/// Minimum percentage score that counts as a pass.
pub const PASSING_SCORE: i32 = 70;

/// Outcome of scoring a submitted attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    /// Percentage of correct answers, rounded to the nearest integer.
    pub score: i32,
    pub passed: bool,
}

/// Score an attempt from the per-answer correctness flags.
///
/// Rejects an empty attempt rather than dividing by zero.
pub fn score_answers(correct: &[bool]) -> Result<QuizOutcome, CoreError> {
    if correct.is_empty() {
        return Err(CoreError::Validation(
            "At least one answer is required".to_string(),
        ));
    }

    let right = correct.iter().filter(|c| **c).count();
    let score = ((right as f64 / correct.len() as f64) * 100.0).round() as i32;

    Ok(QuizOutcome {
        score,
        passed: score >= PASSING_SCORE,
    })
}
