use figment::Jail;
use wikiquiz_config::{DEFAULT_BASE_URL, QuizConfig};

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("WIKIQUIZ_API__BASE_URL", "https://quiz.example.com");
        jail.set_env("WIKIQUIZ_HISTORY__POLL_INTERVAL_MS", "1500");
        jail.set_env("WIKIQUIZ_GENERAL__EXTRA_QUESTIONS", "true");

        let config = QuizConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://quiz.example.com");
        assert_eq!(config.history.poll_interval_ms, 1500);
        assert!(config.general.extra_questions);
        Ok(())
    });
}

#[test]
fn unset_base_url_defaults_to_local_endpoint() {
    Jail::expect_with(|_jail| {
        let config = QuizConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        Ok(())
    });
}

#[test]
fn invalid_env_base_url_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("WIKIQUIZ_API__BASE_URL", "ftp://quiz.example.com");
        assert!(QuizConfig::load().is_err());
        Ok(())
    });
}
