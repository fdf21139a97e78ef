// src/quiz/session.rs

//! Pure state machine for one quiz attempt.
//!
//! No I/O happens here: the timer task feeds [`QuizSession::tick`], the
//! handlers feed [`QuizSession::select`] and [`QuizSession::next`], and the
//! views read the getters.

use crate::models::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    /// Between questions; inputs are not rendered yet.
    Loading,
    /// Countdown running, selection allowed.
    AwaitingAnswer,
    /// Answered or timed out; only "next" is allowed.
    Locked,
    /// Past the last question.
    Finished,
}

/// Visual marking of one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Unmarked,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown still running with this many seconds left.
    Running(u32),
    /// Countdown hit zero; the question is now locked.
    Expired,
    /// The tick did not apply (stale question or not awaiting an answer).
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Correct,
    Wrong,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The next question was entered.
    NextQuestion,
    /// No questions remain; the session should be submitted.
    Finished,
    /// "Next" is disabled in the current phase.
    Blocked,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
    score: usize,
    answered: usize,
    seconds_per_question: u32,
    time_left: u32,
    reveal_on_timeout: bool,
    phase: QuestionPhase,
    marks: Vec<OptionMark>,
}

impl QuizSession {
    /// Creates a session positioned before the first question.
    pub fn new(questions: Vec<Question>, seconds_per_question: u32, reveal_on_timeout: bool) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
            answered: 0,
            seconds_per_question,
            time_left: seconds_per_question,
            reveal_on_timeout,
            phase: QuestionPhase::Loading,
            marks: Vec::new(),
        }
    }

    /// Loads the question at the current index and resets the countdown.
    /// An empty session goes straight to `Finished`.
    pub fn enter_question(&mut self) {
        match self.questions.get(self.index) {
            Some(question) => {
                self.marks = vec![OptionMark::Unmarked; question.options.len()];
                self.time_left = self.seconds_per_question;
                self.phase = QuestionPhase::AwaitingAnswer;
            }
            None => {
                self.marks.clear();
                self.phase = QuestionPhase::Finished;
            }
        }
    }

    /// One countdown step for the question at `index`.
    pub fn tick(&mut self, index: usize) -> TickOutcome {
        if index != self.index || self.phase != QuestionPhase::AwaitingAnswer {
            return TickOutcome::Ignored;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return TickOutcome::Running(self.time_left);
        }

        self.phase = QuestionPhase::Locked;
        self.answered += 1;
        if self.reveal_on_timeout {
            self.mark_answer();
        }
        TickOutcome::Expired
    }

    /// Selects the option at `choice` (display order).
    pub fn select(&mut self, choice: usize) -> SelectOutcome {
        if self.phase != QuestionPhase::AwaitingAnswer {
            return SelectOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.index) else {
            return SelectOutcome::Ignored;
        };
        let Some(picked) = question.options.get(choice) else {
            return SelectOutcome::Ignored;
        };

        let correct = picked == &question.answer;
        self.phase = QuestionPhase::Locked;
        self.answered += 1;

        if correct {
            self.marks[choice] = OptionMark::Correct;
            self.score += 1;
            SelectOutcome::Correct
        } else {
            self.marks[choice] = OptionMark::Wrong;
            self.mark_answer();
            SelectOutcome::Wrong
        }
    }

    /// Moves past a locked question.
    ///
    /// A finished session keeps answering `Finished` until it is submitted.
    pub fn next(&mut self) -> Advance {
        if self.phase == QuestionPhase::Finished {
            return Advance::Finished;
        }
        if self.phase != QuestionPhase::Locked {
            return Advance::Blocked;
        }

        self.index += 1;
        if self.index < self.questions.len() {
            self.phase = QuestionPhase::Loading;
            self.enter_question();
            Advance::NextQuestion
        } else {
            self.phase = QuestionPhase::Finished;
            Advance::Finished
        }
    }

    fn mark_answer(&mut self) {
        if let Some(pos) = self.current_question().and_then(Question::answer_index) {
            self.marks[pos] = OptionMark::Correct;
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuestionPhase::Finished => None,
            _ => self.questions.get(self.index),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn phase(&self) -> QuestionPhase {
        self.phase
    }

    pub fn marks(&self) -> &[OptionMark] {
        &self.marks
    }

    pub fn inputs_locked(&self) -> bool {
        self.phase != QuestionPhase::AwaitingAnswer
    }

    pub fn next_enabled(&self) -> bool {
        self.phase == QuestionPhase::Locked
    }
}
