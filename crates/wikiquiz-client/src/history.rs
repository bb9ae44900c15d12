//! `GET /history`.

use wikiquiz_core::responses::HistoryResponse;

use crate::{ApiClient, error::ApiError, http::decode};

impl ApiClient {
    /// List stored quizzes, newest first, at most `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no response arrives, the backend returns a
    /// non-success status, or the response cannot be decoded.
    pub async fn get_history(&self, limit: u32) -> Result<HistoryResponse, ApiError> {
        let url = format!("{}?limit={limit}", self.endpoint("history"));
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        decode(resp).await
    }
}
