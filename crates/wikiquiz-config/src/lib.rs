//! # wikiquiz-config
//!
//! Resolves [`QuizConfig`] once at startup from layered sources. Later
//! layers override earlier ones:
//!
//! | layer | source                              |
//! |-------|-------------------------------------|
//! | 1     | built-in defaults                   |
//! | 2     | `~/.config/wikiquiz/config.toml`    |
//! | 3     | `.wikiquiz/config.toml` (cwd)       |
//! | 4     | `WIKIQUIZ_*` environment variables  |
//!
//! Nested keys use `__`: `WIKIQUIZ_API__BASE_URL` sets `api.base_url`,
//! `WIKIQUIZ_HISTORY__LIMIT` sets `history.limit`.
//!
//! ```no_run
//! let config = wikiquiz_config::QuizConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod general;
mod history;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use history::HistoryConfig;

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "WIKIQUIZ_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".wikiquiz/config.toml";

/// Project-local dotenv file, preferred over any `.env`.
pub const PROJECT_ENV_FILE: &str = ".wikiquiz/.env";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl QuizConfig {
    /// Resolve from TOML files and the current environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Like [`QuizConfig::load`], after applying a dotenv file.
    ///
    /// `.wikiquiz/.env` wins when present; otherwise the nearest `.env` from
    /// the working directory upward is used, if any. Variables already set
    /// in the process environment are left alone.
    ///
    /// # Errors
    ///
    /// Same as [`QuizConfig::load`], plus [`ConfigError::Dotenv`] when the
    /// project dotenv file is unreadable.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let project_env = Path::new(PROJECT_ENV_FILE);
        if project_env.is_file() {
            dotenvy::from_path(project_env).map_err(|source| ConfigError::Dotenv {
                path: PROJECT_ENV_FILE.to_string(),
                source,
            })?;
        } else {
            // Missing `.env` is the common case.
            let _ = dotenvy::dotenv();
        }
        Self::load()
    }

    /// Extract from `figment`, then validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction or validation failure.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The provider stack, exposed so tests can extend or inspect it.
    #[must_use]
    pub fn figment() -> Figment {
        let files = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(PROJECT_CONFIG_FILE)))
            .filter(|path| path.exists());

        files
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values no component can work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.history.validate()
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wikiquiz").join("config.toml"))
    }
}
