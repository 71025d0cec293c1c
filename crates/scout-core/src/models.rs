//! Pipeline entities. All records are immutable once a stage has produced
//! them; cross-stage references are by id only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Feed a trend was discovered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendSource {
    HackerNews,
    Reddit,
    GithubTrending,
    News,
    Other,
}

impl std::fmt::Display for TrendSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendSource::HackerNews => write!(f, "hacker_news"),
            TrendSource::Reddit => write!(f, "reddit"),
            TrendSource::GithubTrending => write!(f, "github_trending"),
            TrendSource::News => write!(f, "news"),
            TrendSource::Other => write!(f, "other"),
        }
    }
}

/// A signal discovered on an external feed.
///
/// `sentiment` is bounded to `[-1.0, 1.0]` by every constructor in
/// `scout-sources`; `engagement` aggregates upvotes, comments, or stars
/// depending on the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub id: Uuid,
    pub source: TrendSource,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub sentiment: f64,
    pub engagement: u64,
    pub keywords: Vec<String>,
    pub discovered_at: DateTime<Utc>,
}

/// A business idea synthesized from one or more trends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessIdea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub value_proposition: String,
    pub target_market: String,
    pub problem_solved: String,
    pub revenue_model: String,
    pub key_features: Vec<String>,
    /// Ids of the trends this idea was derived from. Never empty.
    pub source_trends: Vec<Uuid>,
    pub generated_at: DateTime<Utc>,
}

/// Four-list SWOT breakdown embedded in a [`BusinessAnalysis`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Strategic analysis attached to one idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessAnalysis {
    pub idea_id: Uuid,
    pub swot: Swot,
    pub competitive_landscape: String,
    pub market_size_estimate: String,
    pub revenue_potential: String,
    pub risk_level: RiskLevel,
    /// Bounded heuristic in `[0.0, 10.0]`.
    pub viability_score: f64,
    pub key_assumptions: Vec<String>,
    pub recommended_next_steps: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

/// Ad platform a validation campaign targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdPlatform {
    Meta,
    Google,
    Linkedin,
}

impl std::fmt::Display for AdPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdPlatform::Meta => write!(f, "meta"),
            AdPlatform::Google => write!(f, "google"),
            AdPlatform::Linkedin => write!(f, "linkedin"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Running,
    Complete,
}

/// Audience targeting block for a validation campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Targeting {
    pub interests: Vec<String>,
    pub age_min: u32,
    pub age_max: u32,
    pub locations: Vec<String>,
    pub device_types: Vec<String>,
}

/// A (simulated) ad campaign used to market-test one idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdCampaign {
    pub id: String,
    pub idea_id: Uuid,
    pub platform: AdPlatform,
    pub campaign_name: String,
    pub ad_copy: String,
    pub targeting: Targeting,
    pub budget: f64,
    pub duration_days: u32,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

/// Raw metrics produced by one validation campaign.
///
/// `ctr` and `conversion_rate` are fractions in `[0.0, 1.0]`;
/// `engagement_score` is bounded to `[0.0, 10.0]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationMetrics {
    pub campaign_id: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub cost: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub conversion_rate: f64,
    pub engagement_score: f64,
}

/// Sample-size sufficiency label derived from click/conversion counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceLevel::Low => write!(f, "low"),
            ConfidenceLevel::Medium => write!(f, "medium"),
            ConfidenceLevel::High => write!(f, "high"),
        }
    }
}

/// Verdict for one idea after its validation campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub idea_id: Uuid,
    pub metrics: ValidationMetrics,
    pub is_promising: bool,
    pub confidence_level: ConfidenceLevel,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub validated_at: DateTime<Utc>,
}

/// Headline counts for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub trends_analyzed: usize,
    pub ideas_generated: usize,
    pub ideas_validated: usize,
    pub promising_ideas: usize,
}

/// Terminal artifact of a pipeline run; persisted as a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutReport {
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub trends: Vec<Trend>,
    pub ideas: Vec<BusinessIdea>,
    pub analyses: Vec<BusinessAnalysis>,
    pub validations: Vec<ValidationResult>,
    pub top_recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_source_serializes_snake_case() {
        let json = serde_json::to_string(&TrendSource::GithubTrending).unwrap();
        assert_eq!(json, "\"github_trending\"");
        let json = serde_json::to_string(&TrendSource::HackerNews).unwrap();
        assert_eq!(json, "\"hacker_news\"");
    }

    #[test]
    fn confidence_level_round_trips() {
        for level in [
            ConfidenceLevel::Low,
            ConfidenceLevel::Medium,
            ConfidenceLevel::High,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            let back: ConfidenceLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(back, level);
        }
    }

    #[test]
    fn ad_platform_display_matches_serde_tag() {
        for platform in [AdPlatform::Meta, AdPlatform::Google, AdPlatform::Linkedin] {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{platform}\""));
        }
    }

    #[test]
    fn trend_omits_missing_url() {
        let trend = Trend {
            id: Uuid::new_v4(),
            source: TrendSource::Reddit,
            title: "t".into(),
            description: "d".into(),
            url: None,
            sentiment: 0.6,
            engagement: 10,
            keywords: vec!["rust".into()],
            discovered_at: Utc::now(),
        };
        let value = serde_json::to_value(&trend).unwrap();
        assert!(value.get("url").is_none());
    }
}
