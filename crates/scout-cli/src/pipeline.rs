//! Pipeline orchestration for the CLI.
//!
//! Each stage function is callable on its own (for the per-stage
//! subcommands) and [`run_pipeline`] chains them into the full run with
//! Slack notifications and report persistence.

use std::path::PathBuf;

use scout_agents::{BusinessAnalyst, LlmIdeaGenerator, MarketValidator, SimulatedMetricsSource};
use scout_core::{AppConfig, BusinessAnalysis, BusinessIdea, Trend, ValidationResult};
use scout_llm::ChatClient;
use scout_report::{assemble_report, save_report, SlackNotifier};
use scout_sources::TrendScanner;

pub(crate) async fn scan_trends(config: &AppConfig) -> anyhow::Result<Vec<Trend>> {
    let mut scanner = TrendScanner::new(config)?;
    Ok(scanner.scan().await)
}

pub(crate) async fn generate_ideas(
    config: &AppConfig,
    trends: &[Trend],
) -> anyhow::Result<Vec<BusinessIdea>> {
    let token = config.require_ai_token()?;
    let client = ChatClient::new(token, &config.llm_model, config.request_timeout_secs)?;
    let generator = LlmIdeaGenerator::new(client);
    Ok(generator.generate(trends, config.max_ideas_per_run).await)
}

pub(crate) fn analyze_ideas(ideas: &[BusinessIdea]) -> Vec<BusinessAnalysis> {
    BusinessAnalyst::new().analyze(ideas)
}

pub(crate) fn validate_ideas(
    config: &AppConfig,
    ideas: &[BusinessIdea],
    analyses: &[BusinessAnalysis],
) -> Vec<ValidationResult> {
    let mut validator = MarketValidator::new(SimulatedMetricsSource::new());
    validator.validate(
        ideas,
        analyses,
        config.validation_budget_per_idea,
        config.validation_duration_days,
    )
}

/// Runs the full scan-to-report pipeline and returns the saved report path.
///
/// The AI token is checked before any network work so a missing credential
/// aborts up front. Pipeline failures are reported to Slack (when
/// configured) before being propagated.
pub(crate) async fn run_pipeline(config: &AppConfig) -> anyhow::Result<PathBuf> {
    config.require_ai_token()?;

    let notifier = SlackNotifier::new(config.slack_webhook_url.clone());
    notifier.notify_pipeline_start().await;

    match run_stages(config, &notifier).await {
        Ok(path) => Ok(path),
        Err(e) => {
            notifier.notify_failure("pipeline", &e.to_string()).await;
            Err(e)
        }
    }
}

async fn run_stages(config: &AppConfig, notifier: &SlackNotifier) -> anyhow::Result<PathBuf> {
    let trends = scan_trends(config).await?;
    if trends.is_empty() {
        anyhow::bail!("no trends discovered across any source; nothing to report");
    }
    notifier
        .notify_phase("Trend scan", &format!("{} trends discovered", trends.len()))
        .await;

    let ideas = generate_ideas(config, &trends).await?;
    notifier
        .notify_phase("Idea generation", &format!("{} ideas generated", ideas.len()))
        .await;

    let analyses = analyze_ideas(&ideas);
    notifier
        .notify_phase(
            "Business analysis",
            &format!("{} ideas analyzed", analyses.len()),
        )
        .await;

    let validations = validate_ideas(config, &ideas, &analyses);
    let promising = validations.iter().filter(|v| v.is_promising).count();
    notifier
        .notify_phase(
            "Market validation",
            &format!("{} of {} ideas promising", promising, validations.len()),
        )
        .await;

    let report = assemble_report(trends, ideas, analyses, validations);
    let path = save_report(&report, &config.data_dir)?;

    notifier
        .notify_report(&report, &path.display().to_string())
        .await;

    println!(
        "scout run complete: {} trends, {} ideas, {} promising",
        report.summary.trends_analyzed, report.summary.ideas_generated, report.summary.promising_ideas
    );
    for recommendation in &report.top_recommendations {
        println!("  {recommendation}");
    }
    println!("report saved to {}", path.display());

    Ok(path)
}
