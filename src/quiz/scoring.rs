// src/quiz/scoring.rs

use crate::{
    error::AppError,
    models::{
        quiz_result::{Completion, QuizResult},
        student::Student,
    },
    storage::{KeyValueStore, LEADERBOARD_KEY, RECORDS_KEY, append_result},
};

use super::session::QuizSession;

/// `round(score / total * 100)`, or 0 for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// Scores a finished session and appends the result to both collections.
///
/// Either both collections gain the result or neither does: if the
/// leaderboard write fails, `records` is put back as it was, so the caller
/// can submit the same session again.
pub async fn submit(
    store: &dyn KeyValueStore,
    session: &QuizSession,
    student: &Student,
    date: String,
) -> Result<Completion, AppError> {
    let correct = session.score();
    let total = session.total();

    let result = QuizResult {
        student: student.clone(),
        score: percentage(correct, total),
        date,
    };

    let previous_records = store.get(RECORDS_KEY).await?;
    append_result(store, RECORDS_KEY, &result).await?;
    if let Err(e) = append_result(store, LEADERBOARD_KEY, &result).await {
        restore(store, RECORDS_KEY, previous_records).await;
        return Err(e);
    }

    tracing::info!(
        "Quiz submitted by '{}': {}/{} ({}%)",
        result.student.name,
        correct,
        total,
        result.score
    );

    Ok(Completion {
        result,
        correct,
        total,
    })
}

async fn restore(store: &dyn KeyValueStore, key: &str, previous: Option<String>) {
    let restored = match previous {
        Some(value) => store.set(key, value).await,
        None => store.remove(key).await,
    };
    if let Err(e) = restored {
        tracing::error!("Failed to roll back '{}' after a partial submit: {}", key, e);
    }
}

/// Orders results by score, highest first.
pub fn rank(mut results: Vec<QuizResult>) -> Vec<QuizResult> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
