use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns [`ConfigError`] if a configured value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process. Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns [`ConfigError`] if a configured value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The core parsing/validation logic is decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let github_token = lookup("GITHUB_TOKEN").ok();
    let llm_model = or_default("SCOUT_LLM_MODEL", "gpt-4o-mini");
    let news_api_key = lookup("NEWS_API_KEY").ok();
    let slack_webhook_url = lookup("SLACK_WEBHOOK_URL").ok();
    let reddit_user_agent = or_default("SCOUT_REDDIT_USER_AGENT", "business-scout/0.1");

    let request_timeout_secs = parse_u64("SCOUT_REQUEST_TIMEOUT_SECS", "10")?;
    let max_ideas_per_run = parse_usize("SCOUT_MAX_IDEAS_PER_RUN", "10")?;
    let validation_budget_per_idea = parse_f64("SCOUT_VALIDATION_BUDGET", "500.0")?;
    let validation_duration_days = parse_u32("SCOUT_VALIDATION_DURATION_DAYS", "7")?;

    // Six-field cron expression (with seconds): every day at 08:00.
    let schedule_cron = or_default("SCOUT_SCHEDULE_CRON", "0 0 8 * * *");
    let data_dir = PathBuf::from(or_default("SCOUT_DATA_DIR", "./data"));
    let log_level = or_default("SCOUT_LOG_LEVEL", "info");

    Ok(AppConfig {
        github_token,
        llm_model,
        news_api_key,
        slack_webhook_url,
        reddit_user_agent,
        request_timeout_secs,
        max_ideas_per_run,
        validation_budget_per_idea,
        validation_duration_days,
        schedule_cron,
        data_dir,
        log_level,
    })
}
