// src/source.rs

use std::sync::Mutex;

use async_trait::async_trait;
use rand::{SeedableRng, rngs::StdRng};
use url::Url;

use crate::{
    error::AppError,
    models::question::{Question, QuestionSetResponse},
    quiz::shuffle::ShuffleMode,
};

/// Where quiz questions come from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(&self, difficulty: &str) -> Result<Vec<Question>, AppError>;
}

/// Client for the Open Trivia DB `api.php` endpoint.
pub struct OpenTdbClient {
    http: reqwest::Client,
    base_url: String,
    amount: u32,
    shuffle_mode: ShuffleMode,
    rng: Mutex<StdRng>,
}

impl OpenTdbClient {
    pub fn new(base_url: impl Into<String>, amount: u32, shuffle_mode: ShuffleMode) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            amount,
            shuffle_mode,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// `{base}?amount=N&difficulty=D&type=multiple`
    pub fn request_url(&self, difficulty: &str) -> Result<Url, AppError> {
        let amount = self.amount.to_string();
        Url::parse_with_params(
            &self.base_url,
            &[
                ("amount", amount.as_str()),
                ("difficulty", difficulty),
                ("type", "multiple"),
            ],
        )
        .map_err(|e| AppError::InternalServerError(format!("Invalid question API URL: {}", e)))
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn fetch_questions(&self, difficulty: &str) -> Result<Vec<Question>, AppError> {
        let url = self.request_url(difficulty)?;
        tracing::debug!("Fetching questions from {}", url);

        let body: QuestionSetResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if body.response_code != 0 {
            return Err(AppError::Upstream(format!(
                "Question API returned response_code {}",
                body.response_code
            )));
        }
        if body.results.is_empty() {
            return Err(AppError::Upstream("Question API returned no questions".to_string()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::InternalServerError("rng poisoned".to_string()))?;

        Ok(body
            .results
            .into_iter()
            .map(|raw| Question::from_raw(raw, self.shuffle_mode, &mut *rng))
            .collect())
    }
}
