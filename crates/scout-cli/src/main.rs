mod pipeline;
mod schedule;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scout_core::{BusinessAnalysis, BusinessIdea, Trend, ValidationResult};

#[derive(Debug, Parser)]
#[command(name = "scout")]
#[command(about = "Business opportunity scout: scans trends, generates and validates ideas")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan all trend sources and print what was found
    Scan,
    /// Scan, then generate business ideas from the top trends
    Ideas,
    /// Scan, generate, and analyze ideas
    Analyze,
    /// Scan, generate, analyze, and run validation campaigns
    Validate,
    /// Full pipeline: all stages plus report persistence and notifications
    Run,
    /// Run the full pipeline on the configured cron schedule
    Schedule,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load_app_config loads .env itself before reading the environment.
    let config = scout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Scan => {
            let trends = pipeline::scan_trends(&config).await?;
            print_trends(&trends);
        }
        Commands::Ideas => {
            let trends = pipeline::scan_trends(&config).await?;
            let ideas = pipeline::generate_ideas(&config, &trends).await?;
            print_ideas(&ideas);
        }
        Commands::Analyze => {
            let trends = pipeline::scan_trends(&config).await?;
            let ideas = pipeline::generate_ideas(&config, &trends).await?;
            let analyses = pipeline::analyze_ideas(&ideas);
            print_analyses(&ideas, &analyses);
        }
        Commands::Validate => {
            let trends = pipeline::scan_trends(&config).await?;
            let ideas = pipeline::generate_ideas(&config, &trends).await?;
            let analyses = pipeline::analyze_ideas(&ideas);
            let validations = pipeline::validate_ideas(&config, &ideas, &analyses);
            print_validations(&ideas, &validations);
        }
        Commands::Run => {
            pipeline::run_pipeline(&config).await?;
        }
        Commands::Schedule => {
            schedule::run_scheduled(config).await?;
        }
    }

    Ok(())
}

fn print_trends(trends: &[Trend]) {
    println!("discovered {} trends", trends.len());
    for trend in trends {
        println!(
            "  [{}] {} (engagement {}, sentiment {:+.2})",
            trend.source, trend.title, trend.engagement, trend.sentiment
        );
    }
}

fn print_ideas(ideas: &[BusinessIdea]) {
    println!("generated {} ideas", ideas.len());
    for idea in ideas {
        println!("  {}", idea.title);
        println!("    {}", idea.description);
        println!("    target market: {}", idea.target_market);
    }
}

fn print_analyses(ideas: &[BusinessIdea], analyses: &[BusinessAnalysis]) {
    println!("analyzed {} ideas", analyses.len());
    for analysis in analyses {
        let title = ideas
            .iter()
            .find(|i| i.id == analysis.idea_id)
            .map_or("(unknown idea)", |i| i.title.as_str());
        println!(
            "  {title}: viability {:.1}/10, risk {}",
            analysis.viability_score, analysis.risk_level
        );
    }
}

fn print_validations(ideas: &[BusinessIdea], validations: &[ValidationResult]) {
    println!("validated {} ideas", validations.len());
    for validation in validations {
        let title = ideas
            .iter()
            .find(|i| i.id == validation.idea_id)
            .map_or("(unknown idea)", |i| i.title.as_str());
        let verdict = if validation.is_promising {
            "promising"
        } else {
            "not promising"
        };
        println!(
            "  {title}: {verdict} (engagement {:.1}/10, confidence {})",
            validation.metrics.engagement_score, validation.confidence_level
        );
    }
}
