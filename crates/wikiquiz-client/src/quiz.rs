//! `GET /quiz/{id}`.

use wikiquiz_core::entities::QuizId;
use wikiquiz_core::responses::QuizDetailResponse;

use crate::{ApiClient, error::ApiError, http::decode};

impl ApiClient {
    /// Fetch one stored quiz by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no response arrives, the backend returns a
    /// non-success status (404 for unknown ids), or the response cannot be
    /// decoded.
    pub async fn get_quiz(&self, id: QuizId) -> Result<QuizDetailResponse, ApiError> {
        let url = self.endpoint(&format!("quiz/{id}"));
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        decode(resp).await
    }
}
