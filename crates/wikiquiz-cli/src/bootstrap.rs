use anyhow::Context;
use wikiquiz_config::QuizConfig;

use crate::cli::GlobalFlags;

/// Resolve configuration once for the whole run, applying `--api-base` on
/// top of every other source.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<QuizConfig> {
    let mut config =
        QuizConfig::load_with_dotenv().context("failed to load wikiquiz configuration")?;
    if let Some(base_url) = &flags.api_base {
        config.api.base_url.clone_from(base_url);
        config.validate().context("invalid --api-base value")?;
    }
    tracing::debug!(base_url = config.api.base_url(), "configuration resolved");
    Ok(config)
}
