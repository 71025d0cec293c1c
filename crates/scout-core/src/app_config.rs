use std::path::PathBuf;

use crate::ConfigError;

/// Application configuration, built once at process entry and passed by
/// reference into each pipeline component.
#[derive(Clone)]
pub struct AppConfig {
    /// GitHub token for the models endpoint. Optional at load time; the
    /// LLM idea-generation path requires it (see [`AppConfig::require_ai_token`]).
    pub github_token: Option<String>,
    pub llm_model: String,
    pub news_api_key: Option<String>,
    pub slack_webhook_url: Option<String>,
    pub reddit_user_agent: String,
    pub request_timeout_secs: u64,
    pub max_ideas_per_run: usize,
    pub validation_budget_per_idea: f64,
    pub validation_duration_days: u32,
    pub schedule_cron: String,
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Returns the AI-provider token, or a configuration error when it is
    /// absent. Called before any LLM-backed stage runs so a missing
    /// credential aborts the pipeline up front.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] for `GITHUB_TOKEN`.
    pub fn require_ai_token(&self) -> Result<&str, ConfigError> {
        self.github_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("GITHUB_TOKEN".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[redacted]"),
            )
            .field("llm_model", &self.llm_model)
            .field(
                "news_api_key",
                &self.news_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "slack_webhook_url",
                &self.slack_webhook_url.as_ref().map(|_| "[redacted]"),
            )
            .field("reddit_user_agent", &self.reddit_user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_ideas_per_run", &self.max_ideas_per_run)
            .field(
                "validation_budget_per_idea",
                &self.validation_budget_per_idea,
            )
            .field("validation_duration_days", &self.validation_duration_days)
            .field("schedule_cron", &self.schedule_cron)
            .field("data_dir", &self.data_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}
