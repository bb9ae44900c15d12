//! # wikiquiz-client
//!
//! HTTP client for the quiz-generation backend.
//!
//! Endpoints:
//! - `POST /generate_quiz`: generate (or fetch a cached) quiz for an article
//! - `GET /history`: list previously generated quizzes, newest first
//! - `GET /quiz/{id}`: fetch one stored quiz
//!
//! [`QuizApi`] is the seam the session engine is written against;
//! [`ApiClient`] is its reqwest-backed implementation.

mod error;
mod generate;
mod history;
mod http;
mod quiz;

pub use error::ApiError;

use std::future::Future;

use wikiquiz_config::ApiConfig;
use wikiquiz_core::entities::QuizId;
use wikiquiz_core::responses::{
    GenerateQuizRequest, GenerateQuizResponse, HistoryResponse, QuizDetailResponse,
};

// ── Trait ──────────────────────────────────────────────────────────

/// Operations the session engine needs from the backend.
pub trait QuizApi: Send + Sync + 'static {
    /// `POST /generate_quiz`.
    fn generate_quiz(
        &self,
        request: &GenerateQuizRequest,
    ) -> impl Future<Output = Result<GenerateQuizResponse, ApiError>> + Send;

    /// `GET /history`, returning at most `limit` rows.
    fn history(&self, limit: u32) -> impl Future<Output = Result<HistoryResponse, ApiError>> + Send;

    /// `GET /quiz/{id}`.
    fn quiz(&self, id: QuizId) -> impl Future<Output = Result<QuizDetailResponse, ApiError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// reqwest-backed client for the quiz backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from resolved API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Build`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::Build)?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl QuizApi for ApiClient {
    async fn generate_quiz(
        &self,
        request: &GenerateQuizRequest,
    ) -> Result<GenerateQuizResponse, ApiError> {
        self.post_generate_quiz(request).await
    }

    async fn history(&self, limit: u32) -> Result<HistoryResponse, ApiError> {
        self.get_history(limit).await
    }

    async fn quiz(&self, id: QuizId) -> Result<QuizDetailResponse, ApiError> {
        self.get_quiz(id).await
    }
}
