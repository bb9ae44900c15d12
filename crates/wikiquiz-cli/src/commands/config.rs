use wikiquiz_config::QuizConfig;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `wikiquiz config`. Raw output is TOML, ready to paste into
/// `.wikiquiz/config.toml`.
pub fn handle(config: &QuizConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Raw {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }
    output(config, flags.format)
}
