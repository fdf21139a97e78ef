// src/config.rs

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::quiz::shuffle::ShuffleMode;

pub const DEFAULT_QUESTION_API_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_QUESTION_COUNT: u32 = 10;
pub const DEFAULT_QUESTION_SECONDS: u32 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub storage_path: String,
    pub question_api_url: String,
    pub question_count: u32,
    pub question_seconds: u32,
    pub shuffle_mode: ShuffleMode,
    /// Whether a timed-out question highlights its correct option.
    pub reveal_on_timeout: bool,
    pub admin_username: String,
    pub admin_password: String,
    /// Argon2 PHC string; takes precedence over `admin_password` when set.
    pub admin_password_hash: Option<String>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            storage_path: "quiz_storage.json".to_string(),
            question_api_url: DEFAULT_QUESTION_API_URL.to_string(),
            question_count: DEFAULT_QUESTION_COUNT,
            question_seconds: DEFAULT_QUESTION_SECONDS,
            shuffle_mode: ShuffleMode::Uniform,
            reveal_on_timeout: false,
            admin_username: "admin".to_string(),
            admin_password: "1234".to_string(),
            admin_password_hash: None,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Config::default();

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            storage_path: env::var("STORAGE_PATH").unwrap_or(defaults.storage_path),
            question_api_url: env::var("QUESTION_API_URL").unwrap_or(defaults.question_api_url),
            question_count: parse_var("QUESTION_COUNT", defaults.question_count),
            question_seconds: parse_var("QUESTION_SECONDS", defaults.question_seconds),
            shuffle_mode: parse_var("SHUFFLE_MODE", defaults.shuffle_mode),
            reveal_on_timeout: parse_var("REVEAL_ON_TIMEOUT", defaults.reveal_on_timeout),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH").ok(),
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        }
    }
}

/// Reads and parses an environment variable, falling back to `default`
/// when it is unset or unparsable.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}
