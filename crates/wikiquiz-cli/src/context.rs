use std::sync::Arc;

use wikiquiz_client::ApiClient;
use wikiquiz_config::QuizConfig;
use wikiquiz_session::QuizSession;

/// Everything a command handler needs: resolved config and the session
/// engine wired to the HTTP backend.
pub struct AppContext {
    pub config: QuizConfig,
    pub session: QuizSession<ApiClient>,
}

impl AppContext {
    pub fn init(config: QuizConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api)?;
        let session = QuizSession::new(Arc::new(client), &config);
        Ok(Self { config, session })
    }
}
