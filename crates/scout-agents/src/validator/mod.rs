//! Market validation: one simulated ad campaign per idea, with threshold
//! verdicts derived from the campaign metrics.
//!
//! The verdict functions are pure and exported so the exact boundary
//! behaviour can be tested independently of any metrics source.

mod campaign;
mod metrics;

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use scout_core::{
    AdCampaign, BusinessAnalysis, BusinessIdea, ConfidenceLevel, ValidationMetrics,
    ValidationResult,
};

pub use campaign::classify_platform;
pub use metrics::{MetricsSource, SimulatedMetricsSource};

const MIN_CTR: f64 = 0.015;
const MIN_CONVERSION_RATE: f64 = 0.02;
const MIN_ENGAGEMENT_SCORE: f64 = 5.0;

/// Engagement score in `[0.0, 10.0]`, weighting CTR, conversion rate, and
/// absolute conversion volume.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn engagement_score(ctr: f64, conversion_rate: f64, conversions: u64) -> f64 {
    let score = (ctr / 0.05) * 3.0
        + (conversion_rate / 0.1) * 4.0
        + (conversions as f64 / 50.0).min(1.0) * 3.0;
    score.clamp(0.0, 10.0)
}

/// An idea is promising exactly when all three thresholds hold. No other
/// condition may flip this verdict.
#[must_use]
pub fn is_promising(metrics: &ValidationMetrics) -> bool {
    metrics.ctr >= MIN_CTR
        && metrics.conversion_rate >= MIN_CONVERSION_RATE
        && metrics.engagement_score >= MIN_ENGAGEMENT_SCORE
}

/// Sample-size sufficiency from conversion and click volume.
#[must_use]
pub fn confidence_level(metrics: &ValidationMetrics) -> ConfidenceLevel {
    if metrics.conversions >= 50 && metrics.clicks >= 500 {
        ConfidenceLevel::High
    } else if metrics.conversions >= 20 && metrics.clicks >= 200 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Validates ideas by running one campaign each against a metrics source.
pub struct MarketValidator<M: MetricsSource> {
    metrics_source: M,
    campaigns: Vec<AdCampaign>,
    validations: Vec<ValidationResult>,
}

impl<M: MetricsSource> MarketValidator<M> {
    #[must_use]
    pub fn new(metrics_source: M) -> Self {
        Self {
            metrics_source,
            campaigns: Vec::new(),
            validations: Vec::new(),
        }
    }

    /// Runs a validation campaign for every idea.
    ///
    /// An idea with no matching analysis is still validated, at the neutral
    /// base performance. Output order follows the input idea order.
    pub fn validate(
        &mut self,
        ideas: &[BusinessIdea],
        analyses: &[BusinessAnalysis],
        budget_per_idea: f64,
        duration_days: u32,
    ) -> Vec<ValidationResult> {
        tracing::info!(
            count = ideas.len(),
            budget_per_idea,
            duration_days,
            "validating ideas"
        );

        let analyses_by_idea: HashMap<Uuid, &BusinessAnalysis> =
            analyses.iter().map(|a| (a.idea_id, a)).collect();

        let mut validations = Vec::with_capacity(ideas.len());
        for idea in ideas {
            let analysis = analyses_by_idea.get(&idea.id).copied();
            let campaign = campaign::build_campaign(idea, budget_per_idea, duration_days);

            let metrics = self.metrics_source.campaign_metrics(&campaign, analysis);
            let promising = is_promising(&metrics);

            tracing::debug!(
                idea = %idea.title,
                platform = %campaign.platform,
                promising,
                engagement = metrics.engagement_score,
                "campaign complete"
            );

            validations.push(ValidationResult {
                idea_id: idea.id,
                key_insights: key_insights(&metrics, &campaign),
                recommendations: recommendations(promising, &metrics),
                is_promising: promising,
                confidence_level: confidence_level(&metrics),
                metrics,
                validated_at: Utc::now(),
            });
            self.campaigns.push(campaign);
        }

        self.validations.clone_from(&validations);
        validations
    }

    /// Campaigns created by previous [`MarketValidator::validate`] calls.
    #[must_use]
    pub fn campaigns(&self) -> &[AdCampaign] {
        &self.campaigns
    }

    /// Validations from the last run that cleared the promising thresholds.
    #[must_use]
    pub fn promising_validations(&self) -> Vec<&ValidationResult> {
        self.validations.iter().filter(|v| v.is_promising).collect()
    }
}

fn key_insights(metrics: &ValidationMetrics, campaign: &AdCampaign) -> Vec<String> {
    let mut insights = Vec::new();

    if metrics.ctr > 0.04 {
        insights.push(format!(
            "Strong CTR of {:.2}% indicates compelling value proposition",
            metrics.ctr * 100.0
        ));
    } else if metrics.ctr < 0.01 {
        insights.push(format!(
            "Low CTR of {:.2}% suggests messaging needs improvement",
            metrics.ctr * 100.0
        ));
    }

    if metrics.conversion_rate > 0.08 {
        insights.push(format!(
            "High conversion rate of {:.1}% shows strong market interest",
            metrics.conversion_rate * 100.0
        ));
    } else if metrics.conversion_rate < 0.03 {
        insights.push(
            "Low conversion rate may indicate landing page or offer needs optimization"
                .to_string(),
        );
    }

    if metrics.cpc > 0.0 && metrics.cpc < 1.0 {
        insights.push(format!(
            "Low CPC of ${:.2} suggests efficient targeting",
            metrics.cpc
        ));
    } else if metrics.cpc > 5.0 {
        insights.push(format!(
            "High CPC of ${:.2} may impact profitability",
            metrics.cpc
        ));
    }

    insights.push(format!(
        "{} platform showed engagement score of {:.1}/10",
        campaign.platform, metrics.engagement_score
    ));

    insights
}

fn recommendations(promising: bool, metrics: &ValidationMetrics) -> Vec<String> {
    if promising {
        return vec![
            "Proceed with MVP development - validation shows clear market interest".to_string(),
            "Scale ad spend gradually to acquire early users".to_string(),
            "A/B test different messaging to optimize conversion rate".to_string(),
            "Set up an email nurture campaign for leads".to_string(),
            "Consider expanding to additional ad platforms".to_string(),
        ];
    }

    let mut recs = vec!["Results inconclusive - consider pivot or iteration".to_string()];
    if metrics.ctr < MIN_CTR {
        recs.push("Improve ad copy and creative to increase CTR".to_string());
    }
    if metrics.conversion_rate < 0.03 {
        recs.push("Redesign landing page to better communicate value".to_string());
    }
    recs.extend([
        "Conduct user interviews to understand hesitation".to_string(),
        "Test alternative value propositions".to_string(),
        "Consider narrowing or broadening target market".to_string(),
    ]);
    recs
}
