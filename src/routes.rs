// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{admin, certificate, leaderboard, page, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * One route per UI control; every state change answers with a redirect to `/`.
/// * Applies global middleware (Trace).
pub fn create_router(state: AppState) -> Router {
    let quiz_routes = Router::new()
        .route("/answer", post(quiz::answer))
        .route("/next", post(quiz::next));

    let leaderboard_routes = Router::new()
        .route("/", get(leaderboard::show_leaderboard))
        .route("/reset", post(leaderboard::reset_leaderboard));

    Router::new()
        .route("/", get(page::show_current))
        .route("/home", get(page::home))
        .route("/login", post(quiz::login))
        .route("/certificate.png", get(certificate::download_certificate))
        .route("/admin/login", post(admin::admin_login))
        .nest("/quiz", quiz_routes)
        .nest("/leaderboard", leaderboard_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
