//! Shared data model and configuration for the business scout pipeline.
//!
//! The pipeline flows strictly forward: trends are discovered, synthesized
//! into business ideas, analysed for viability, validated against simulated
//! campaign metrics, and finally assembled into a [`ScoutReport`]. Each
//! stage owns its output list; downstream stages refer back by identifier.

pub mod app_config;
pub mod config;
pub mod models;
pub mod text;

pub use app_config::AppConfig;
pub use text::capitalize;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use models::{
    AdCampaign, AdPlatform, BusinessAnalysis, BusinessIdea, CampaignStatus, ConfidenceLevel,
    ReportSummary, RiskLevel, ScoutReport, Swot, Targeting, Trend, TrendSource, ValidationMetrics,
    ValidationResult,
};
