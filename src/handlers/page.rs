// src/handlers/page.rs

use axum::{
    extract::State,
    response::{Html, Redirect},
};

use crate::{
    error::AppError,
    quiz::{scoring::rank, session::QuestionPhase},
    state::{AppState, Ui},
    storage::{LEADERBOARD_KEY, RECORDS_KEY, load_results},
    views::{
        panel::Panel,
        render::{render_admin, render_leaderboard, render_login, render_page, render_quiz, render_result},
    },
};

/// Renders whichever panel is currently shown.
///
/// A pending alert is displayed once and then cleared. While a question is
/// awaiting an answer the page refreshes itself every second so the
/// countdown stays current.
pub async fn show_current(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut ui = state.ui.lock().await;
    fall_back_to_login(&mut ui);

    let alert = ui.alert.take();
    let panel = ui.router.current();
    let mut auto_refresh = false;

    let body = match panel {
        Panel::Login => render_login(),
        Panel::Quiz => match ui.session.as_ref() {
            Some(session) => {
                auto_refresh = session.phase() == QuestionPhase::AwaitingAnswer;
                render_quiz(session)
            }
            None => render_login(),
        },
        Panel::Result => match ui.completion.as_ref() {
            Some(completion) => render_result(completion),
            None => render_login(),
        },
        Panel::Leaderboard => {
            let ranked = rank(load_results(state.store.as_ref(), LEADERBOARD_KEY).await?);
            render_leaderboard(&ranked, ui.confirm_reset)
        }
        Panel::Admin => {
            let records = load_results(state.store.as_ref(), RECORDS_KEY).await?;
            render_admin(&records)
        }
    };

    Ok(Html(render_page(panel, body, alert.as_deref(), auto_refresh).into_string()))
}

/// Quiz and result panels need their data; without it the login panel is shown.
fn fall_back_to_login(ui: &mut Ui) {
    let missing = match ui.router.current() {
        Panel::Quiz => ui.session.is_none(),
        Panel::Result => ui.completion.is_none(),
        _ => false,
    };
    if missing {
        ui.router.show(Panel::Login);
    }
}

/// Returns to the login panel unless a quiz is running.
pub async fn home(State(state): State<AppState>) -> Redirect {
    let mut ui = state.ui.lock().await;
    if !ui.quiz_in_progress() {
        ui.confirm_reset = false;
        ui.router.show(Panel::Login);
    }
    Redirect::to("/")
}
