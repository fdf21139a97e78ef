// src/handlers/admin.rs

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;

use crate::{state::AppState, views::panel::Panel};

pub const INVALID_CREDENTIALS_ALERT: &str = "Invalid admin credentials";

/// Form submitted from the admin login.
#[derive(Debug, Default, Deserialize)]
pub struct AdminLoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Shows every stored record if the credentials are accepted.
///
/// On failure the current panel stays as it is and an alert is raised.
/// There is no lockout and no session: each visit needs a fresh login.
pub async fn admin_login(
    State(state): State<AppState>,
    Form(form): Form<AdminLoginForm>,
) -> Redirect {
    let mut ui = state.ui.lock().await;
    if ui.quiz_in_progress() {
        return Redirect::to("/");
    }

    if state.verifier.verify(&form.username, &form.password) {
        tracing::info!("Admin '{}' logged in", form.username);
        ui.router.show(Panel::Admin);
    } else {
        tracing::warn!("Rejected admin login for '{}'", form.username);
        ui.alert = Some(INVALID_CREDENTIALS_ALERT.to_string());
    }

    Redirect::to("/")
}
