//! Pipeline agents: idea synthesis, strategic analysis, market validation.
//!
//! Each agent consumes the previous stage's output list and produces its
//! own. Agents never mutate upstream records; they refer back by id.

pub mod analyst;
pub mod idea;
pub mod validator;

pub use analyst::{viability_score, BusinessAnalyst};
pub use idea::{fallback_idea, select_top_trends, LlmIdeaGenerator, TemplateIdeaGenerator};
pub use validator::{
    classify_platform, confidence_level, engagement_score, is_promising, MarketValidator,
    MetricsSource, SimulatedMetricsSource,
};
