//! Campaign metrics sources.
//!
//! The thresholding logic in the parent module is pure; where the numbers
//! come from is behind [`MetricsSource`] so tests can inject fixed or
//! seeded values, and a real campaign-API adapter can slot in later.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use scout_core::{AdCampaign, BusinessAnalysis, ValidationMetrics};

use super::engagement_score;

/// Produces the raw metrics for one campaign.
pub trait MetricsSource {
    fn campaign_metrics(
        &mut self,
        campaign: &AdCampaign,
        analysis: Option<&BusinessAnalysis>,
    ) -> ValidationMetrics;
}

/// Synthetic metrics generator: draws campaign numbers from distributions
/// scaled by the idea's viability score. No ad platform is ever contacted.
pub struct SimulatedMetricsSource {
    rng: StdRng,
    ctr_dist: Normal<f64>,
    conversion_dist: Normal<f64>,
}

impl Default for SimulatedMetricsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedMetricsSource {
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic generator for tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            // Constant parameters; construction cannot fail.
            ctr_dist: Normal::new(0.03, 0.015).expect("valid ctr distribution"),
            conversion_dist: Normal::new(0.05, 0.02).expect("valid conversion distribution"),
        }
    }
}

impl MetricsSource for SimulatedMetricsSource {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn campaign_metrics(
        &mut self,
        campaign: &AdCampaign,
        analysis: Option<&BusinessAnalysis>,
    ) -> ValidationMetrics {
        // Higher viability translates into better simulated performance.
        let base_performance =
            analysis.map_or(0.5, |a| a.viability_score / 10.0 * 0.7 + 0.3);
        let performance_factor = base_performance * self.rng.random_range(0.8..=1.2);

        let impressions =
            (self.rng.random_range(50_000..=200_000) as f64 * performance_factor) as u64;

        let ctr = (self.ctr_dist.sample(&mut self.rng) * performance_factor).clamp(0.005, 0.15);
        let clicks = (impressions as f64 * ctr) as u64;

        let conversion_rate =
            (self.conversion_dist.sample(&mut self.rng) * performance_factor).clamp(0.01, 0.20);
        let conversions = (clicks as f64 * conversion_rate) as u64;

        let cost = campaign.budget;
        let cpc = if clicks > 0 { cost / clicks as f64 } else { 0.0 };

        ValidationMetrics {
            campaign_id: campaign.id.clone(),
            impressions,
            clicks,
            conversions,
            cost,
            ctr,
            cpc,
            conversion_rate,
            engagement_score: engagement_score(ctr, conversion_rate, conversions),
        }
    }
}
