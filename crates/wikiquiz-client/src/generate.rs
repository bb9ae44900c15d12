//! `POST /generate_quiz`.

use wikiquiz_core::responses::{GenerateQuizRequest, GenerateQuizResponse};

use crate::{ApiClient, error::ApiError, http::decode};

impl ApiClient {
    /// Ask the backend to generate a quiz for `request.url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no response arrives, the backend returns a
    /// non-success status, or the response cannot be decoded.
    pub async fn post_generate_quiz(
        &self,
        request: &GenerateQuizRequest,
    ) -> Result<GenerateQuizResponse, ApiError> {
        let url = self.endpoint("generate_quiz");
        tracing::debug!(
            %url,
            article = %request.url,
            extra = request.extra_questions,
            "requesting quiz generation"
        );
        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        decode(resp).await
    }
}
