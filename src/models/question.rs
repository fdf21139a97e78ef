// src/models/question.rs

use rand::Rng;
use serde::Deserialize;

use crate::quiz::shuffle::{ShuffleMode, shuffle};

/// A multiple-choice question ready to be asked.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The question text as delivered by the source.
    pub text: String,

    /// Options in display order. Contains `answer` exactly once.
    pub options: Vec<String>,

    /// The correct option, compared against the student's selection.
    pub answer: String,
}

impl Question {
    /// Builds a question from a raw source entry.
    ///
    /// Merges the incorrect answers and the correct answer into one option list,
    /// shuffles it, and keeps the correct answer aside for grading.
    /// An incorrect answer equal to the correct one is dropped so the answer
    /// stays unique among the options.
    pub fn from_raw<R: Rng + ?Sized>(raw: RawQuestion, mode: ShuffleMode, rng: &mut R) -> Self {
        let mut options: Vec<String> = raw
            .incorrect_answers
            .into_iter()
            .filter(|option| option != &raw.correct_answer)
            .collect();
        options.push(raw.correct_answer.clone());

        Self {
            text: raw.question,
            options: shuffle(options, mode, rng),
            answer: raw.correct_answer,
        }
    }

    /// Index of the correct option in display order.
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option == &self.answer)
    }
}

/// Response body of the trivia API.
#[derive(Debug, Deserialize)]
pub struct QuestionSetResponse {
    /// 0 means success; anything else means the set is unusable.
    #[serde(default)]
    pub response_code: i64,
    pub results: Vec<RawQuestion>,
}

/// One question as returned by the trivia API.
/// Extra fields (`type`, `difficulty`, `category`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub incorrect_answers: Vec<String>,
    pub correct_answer: String,
}
