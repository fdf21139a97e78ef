// src/models/quiz_result.rs

use serde::{Deserialize, Serialize};

use super::student::Student;

/// Persisted outcome of one completed quiz.
/// Stored in both the `records` and the `leaderboard` collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub student: Student,

    /// Percentage of correct answers, 0..=100.
    pub score: u32,

    /// Completion time, human readable.
    pub date: String,
}

/// What the result panel needs: the persisted result plus the raw tally
/// used by the certificate.
#[derive(Debug, Clone)]
pub struct Completion {
    pub result: QuizResult,
    pub correct: usize,
    pub total: usize,
}
