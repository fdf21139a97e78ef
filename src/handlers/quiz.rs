// src/handlers/quiz.rs

use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::student::{LoginForm, Student},
    quiz::{
        scoring::submit,
        session::{Advance, SelectOutcome},
    },
    state::AppState,
    utils::clock::now_timestamp,
    views::panel::Panel,
};

pub const FETCH_FAILED_ALERT: &str = "Failed to load quiz questions from API.";

/// Option chosen on the quiz panel, by display position.
#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub option: usize,
}

/// Builds the student from the login form, fetches questions and starts the quiz.
///
/// * On fetch failure the login panel stays up with an alert; nothing is committed.
/// * Ignored unless the login panel is showing.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    if state.ui.lock().await.router.current() != Panel::Login {
        return Ok(Redirect::to("/"));
    }

    let student = Student::from_form(form, now_timestamp());
    tracing::info!(
        "Student '{}' (roll '{}') requested a {} quiz",
        student.name,
        student.roll,
        student.difficulty
    );

    let fetched = match state.source.fetch_questions(&student.difficulty).await {
        Ok(questions) if questions.is_empty() => {
            Err(AppError::Upstream("Question source returned no questions".to_string()))
        }
        other => other,
    };

    let mut ui = state.ui.lock().await;
    match fetched {
        Ok(questions) => {
            if ui.router.current() != Panel::Login {
                return Ok(Redirect::to("/"));
            }
            tracing::info!("Loaded {} questions", questions.len());
            ui.begin_quiz(student, questions, &state.config);
            ui.start_countdown(state.ui.clone());
        }
        Err(e) => {
            tracing::error!("Failed to load quiz questions: {}", e);
            ui.alert = Some(FETCH_FAILED_ALERT.to_string());
        }
    }

    Ok(Redirect::to("/"))
}

/// Locks the current question with the chosen option and stops its countdown.
/// Selections after the lock change nothing.
pub async fn answer(State(state): State<AppState>, Form(form): Form<AnswerForm>) -> Redirect {
    let mut ui = state.ui.lock().await;

    let outcome = match ui.session.as_mut() {
        Some(session) => session.select(form.option),
        None => SelectOutcome::Ignored,
    };

    if outcome != SelectOutcome::Ignored {
        ui.timer.stop();
        tracing::debug!("Option {} selected: {:?}", form.option, outcome);
    }

    Redirect::to("/")
}

/// Moves to the next question, or submits the quiz after the last one.
/// A submit that fails leaves the finished quiz on screen for another try.
pub async fn next(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mut ui = state.ui.lock().await;

    let advance = match ui.session.as_mut() {
        Some(session) => session.next(),
        None => Advance::Blocked,
    };

    match advance {
        Advance::Blocked => {}
        Advance::NextQuestion => ui.start_countdown(state.ui.clone()),
        Advance::Finished => {
            ui.timer.stop();
            let (Some(session), Some(student)) = (ui.session.as_ref(), ui.student.as_ref()) else {
                return Err(AppError::InternalServerError(
                    "Finished quiz without a student".to_string(),
                ));
            };

            // The session stays in place until the write succeeds, so a
            // failed submit can be retried with another `next`.
            let completion = submit(state.store.as_ref(), session, student, now_timestamp()).await?;
            ui.session = None;
            ui.student = None;
            ui.completion = Some(completion);
            ui.router.show(Panel::Result);
        }
    }

    Ok(Redirect::to("/"))
}
