// src/handlers/certificate.rs

use axum::{extract::State, http::header, response::IntoResponse};

use crate::{
    certificate::{CERTIFICATE_FILENAME, render_certificate},
    error::AppError,
    state::AppState,
    utils::clock::today,
};

/// Serves the certificate of the last completed quiz as a PNG download.
pub async fn download_certificate(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let ui = state.ui.lock().await;
    let completion = ui
        .completion
        .as_ref()
        .ok_or(AppError::NotFound("No completed quiz".to_string()))?;

    let png = render_certificate(
        &completion.result.student,
        completion.correct,
        completion.total,
        &today(),
    )?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CERTIFICATE_FILENAME),
            ),
        ],
        png,
    ))
}
