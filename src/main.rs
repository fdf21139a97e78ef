// src/main.rs

use std::sync::Arc;

use quiz_client::config::Config;
use quiz_client::routes;
use quiz_client::source::OpenTdbClient;
use quiz_client::state::AppState;
use quiz_client::storage::FileStore;
use quiz_client::utils::credentials::{CredentialVerifier, HashedCredentials, StaticCredentials};
use quiz_client::utils::hash::hash_password;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // `quiz-client hash-password <password>` prints a value for ADMIN_PASSWORD_HASH.
    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(String::as_str) == Some("hash-password") {
        let Some(password) = args.get(2) else {
            eprintln!("usage: quiz-client hash-password <password>");
            std::process::exit(2);
        };
        match hash_password(password) {
            Ok(hash) => println!("{}", hash),
            Err(e) => {
                eprintln!("Failed to hash password: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Load configuration from environment (and .env, if present)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "quiz.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let verifier: Arc<dyn CredentialVerifier> = match &config.admin_password_hash {
        Some(hash) => {
            tracing::info!("Admin login uses a password hash");
            Arc::new(HashedCredentials::new(config.admin_username.clone(), hash.clone()))
        }
        None => Arc::new(StaticCredentials::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
        )),
    };

    let source = Arc::new(OpenTdbClient::new(
        config.question_api_url.clone(),
        config.question_count,
        config.shuffle_mode,
    ));
    let store = Arc::new(FileStore::new(&config.storage_path));

    tracing::info!(
        "Storage: {}, questions: {} x {}s, shuffle: {}",
        config.storage_path,
        config.question_count,
        config.question_seconds,
        config.shuffle_mode
    );

    let state = AppState::new(config.clone(), store, source, verifier);
    let app = routes::create_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Quiz open at http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
