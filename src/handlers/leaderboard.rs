// src/handlers/leaderboard.rs

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;

use crate::{
    error::AppError,
    state::AppState,
    storage::{LEADERBOARD_KEY, clear_results},
    views::panel::Panel,
};

#[derive(Debug, Default, Deserialize)]
pub struct ResetForm {
    pub confirm: Option<String>,
}

/// Shows the ranked leaderboard. Not reachable while a quiz is running.
pub async fn show_leaderboard(State(state): State<AppState>) -> Redirect {
    let mut ui = state.ui.lock().await;
    if !ui.quiz_in_progress() {
        ui.confirm_reset = false;
        ui.router.show(Panel::Leaderboard);
    }
    Redirect::to("/")
}

/// Clears the leaderboard collection once confirmed.
///
/// The first request (no `confirm=yes`) only asks for confirmation.
/// `records` is never touched.
pub async fn reset_leaderboard(
    State(state): State<AppState>,
    Form(form): Form<ResetForm>,
) -> Result<Redirect, AppError> {
    let mut ui = state.ui.lock().await;
    if ui.quiz_in_progress() {
        return Ok(Redirect::to("/"));
    }

    if form.confirm.as_deref() == Some("yes") {
        clear_results(state.store.as_ref(), LEADERBOARD_KEY).await?;
        ui.confirm_reset = false;
        tracing::info!("Leaderboard reset");
    } else {
        ui.confirm_reset = true;
    }
    ui.router.show(Panel::Leaderboard);

    Ok(Redirect::to("/"))
}
