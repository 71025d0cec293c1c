//! Strategic analysis of business ideas.
//!
//! The SWOT lists come from a fixed catalog (the same statements for every
//! idea) and the landscape/market/revenue texts from small fixed pools; the
//! only computed value is the viability score, which must reproduce the
//! clamped additive formula exactly.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use scout_core::{BusinessAnalysis, BusinessIdea, RiskLevel, Swot};

const COMPETITION_LEVELS: &[&str] = &[
    "moderate - several established players but no dominant leader",
    "low - emerging market with few direct competitors",
    "high - crowded market requiring strong differentiation",
    "moderate - niche market with specialized competitors",
];

const LANDSCAPE_DETAILS: &[&str] = &[
    "Key differentiators needed: unique AI capabilities, superior UX, and faster time-to-value. \
     Market fragmentation presents opportunity for consolidation.",
    "Incumbents focus on enterprise, leaving the SMB segment underserved. \
     Window of opportunity exists for 18-24 months.",
    "Existing solutions are legacy systems with poor user experience. \
     A modern, user-friendly approach could capture significant market share.",
];

const MARKET_SIZES: &[&str] = &[
    "TAM: $5-10B globally, SAM: $500M-1B, SOM: $50-100M in first 3 years",
    "TAM: $1-3B globally, SAM: $200-400M, SOM: $20-50M in first 3 years",
    "TAM: $500M-1B globally, SAM: $100-200M, SOM: $10-20M in first 3 years",
    "TAM: $10B+ globally, SAM: $1-2B, SOM: $100-200M in first 3 years",
];

const REVENUE_POTENTIALS: &[&str] = &[
    "Conservative: $500K ARR Year 1, $2M Year 2, $5M Year 3",
    "Conservative: $300K ARR Year 1, $1.5M Year 2, $4M Year 3",
    "Conservative: $1M ARR Year 1, $3M Year 2, $8M Year 3",
    "Conservative: $200K ARR Year 1, $1M Year 2, $3M Year 3",
];

// Medium appears twice so it is drawn twice as often.
const RISK_LEVELS: &[RiskLevel] = &[
    RiskLevel::Low,
    RiskLevel::Medium,
    RiskLevel::Medium,
    RiskLevel::High,
];

const KEY_ASSUMPTIONS: &[&str] = &[
    "Market adoption rate of 5-10% in first year",
    "Customer acquisition cost can be kept below $100",
    "Product-market fit achieved within 6 months",
    "Competition remains fragmented",
];

const NEXT_STEPS: &[&str] = &[
    "Conduct customer interviews with 20-30 target users",
    "Build MVP focusing on core features",
    "Run market validation campaigns with $1000-2000 budget",
    "Identify and reach out to potential early adopters",
];

/// Viability score in `[0.0, 10.0]`.
///
/// Piecewise, additive, and bounded: each SWOT term is capped before
/// summing, and a keyword match on the competitive landscape adds a flat
/// bonus. The clamps must hold for any list length.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn viability_score(swot: &Swot, competitive_landscape: &str) -> f64 {
    let strength_bonus = (swot.strengths.len() as f64 * 0.3).min(2.0);
    let weakness_penalty = (swot.weaknesses.len() as f64 * 0.2).min(1.5);
    let opportunity_bonus = (swot.opportunities.len() as f64 * 0.2).min(1.0);

    let landscape = competitive_landscape.to_lowercase();
    let competitive_bonus = if landscape.contains("low") {
        1.0
    } else if landscape.contains("moderate") {
        0.5
    } else {
        0.0
    };

    (5.0 + strength_bonus - weakness_penalty + opportunity_bonus + competitive_bonus)
        .clamp(0.0, 10.0)
}

/// Analyses ideas with a fixed SWOT catalog and text pools.
pub struct BusinessAnalyst {
    rng: StdRng,
}

impl Default for BusinessAnalyst {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessAnalyst {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic analyst for tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Analyses every idea and returns the results sorted by viability
    /// score descending.
    pub fn analyze(&mut self, ideas: &[BusinessIdea]) -> Vec<BusinessAnalysis> {
        tracing::info!(count = ideas.len(), "analyzing ideas");

        let mut analyses: Vec<BusinessAnalysis> =
            ideas.iter().map(|idea| self.analyze_idea(idea)).collect();
        analyses.sort_by(|a, b| b.viability_score.total_cmp(&a.viability_score));
        analyses
    }

    fn analyze_idea(&mut self, idea: &BusinessIdea) -> BusinessAnalysis {
        let swot = swot_catalog();
        let competitive_landscape = self.competitive_landscape();
        let score = viability_score(&swot, &competitive_landscape);

        tracing::debug!(idea = %idea.title, viability = score, "analyzed idea");

        BusinessAnalysis {
            idea_id: idea.id,
            swot,
            competitive_landscape,
            market_size_estimate: (*self.pick(MARKET_SIZES)).to_string(),
            revenue_potential: (*self.pick(REVENUE_POTENTIALS)).to_string(),
            risk_level: *self.pick(RISK_LEVELS),
            viability_score: score,
            key_assumptions: KEY_ASSUMPTIONS.iter().map(|s| (*s).to_string()).collect(),
            recommended_next_steps: NEXT_STEPS.iter().map(|s| (*s).to_string()).collect(),
            analyzed_at: Utc::now(),
        }
    }

    fn competitive_landscape(&mut self) -> String {
        let level = *self.pick(COMPETITION_LEVELS);
        let detail = *self.pick(LANDSCAPE_DETAILS);
        format!("Competition level: {level}. {detail}")
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }
}

fn swot_catalog() -> Swot {
    let owned = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
    Swot {
        strengths: owned(&[
            "Addresses clear market pain point",
            "Scalable SaaS model",
            "Low initial development costs",
            "Strong value proposition",
            "Fast iteration on customer feedback",
        ]),
        weaknesses: owned(&[
            "Unproven market demand",
            "Limited brand recognition",
            "Dependency on third-party platforms",
            "Small initial team",
            "No proprietary data moat yet",
        ]),
        opportunities: owned(&[
            "Growing market trend",
            "Potential for rapid user acquisition",
            "Expansion to adjacent markets",
            "Strategic partnerships possible",
            "Early-mover advantage in the niche",
        ]),
        threats: owned(&[
            "Established competitors may enter space",
            "Market preferences could shift",
            "Regulatory changes",
            "Economic downturn affecting B2B spending",
            "Platform policy changes upstream",
        ]),
    }
}
