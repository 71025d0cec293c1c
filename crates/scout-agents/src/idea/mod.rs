//! Idea synthesis: maps trends to business-idea records.
//!
//! Two interchangeable strategies: [`TemplateIdeaGenerator`] produces
//! deterministic ideas from a fixed catalog keyed by a trend's first
//! keyword; [`LlmIdeaGenerator`] asks the chat-completion endpoint and
//! substitutes a deterministic fallback idea on any failure, so the stage
//! never loses an idea.

mod templates;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use scout_core::{capitalize, BusinessIdea, Trend};
use scout_llm::{ChatClient, LlmError};

use templates::template_for;

const GENERATION_TEMPERATURE: f64 = 0.8;

const SYSTEM_PROMPT: &str = "You are a business consultant specializing in identifying startup opportunities.\n\
Analyze trends and generate concrete, actionable business ideas.\n\
Focus on problems that can be solved with technology and have clear revenue models.";

/// Rank trends by `engagement * (1 + sentiment)` descending and return the
/// top `limit`. The sort is stable, so equally scored trends keep their
/// insertion order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn select_top_trends(trends: &[Trend], limit: usize) -> Vec<Trend> {
    let mut scored: Vec<(f64, Trend)> = trends
        .iter()
        .map(|t| (t.engagement as f64 * (1.0 + t.sentiment), t.clone()))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, t)| t).collect()
}

/// Deterministic fallback idea built purely from the trend's own fields.
/// Used whenever LLM generation fails for a trend.
#[must_use]
pub fn fallback_idea(trend: &Trend) -> BusinessIdea {
    let theme = trend
        .keywords
        .first()
        .map_or_else(|| "Market".to_string(), |k| capitalize(k));

    BusinessIdea {
        id: Uuid::new_v4(),
        title: format!("Solution for {theme} Space"),
        description: format!("A platform addressing the {}", trend.title.to_lowercase()),
        value_proposition: "Solve key challenges in this emerging market".to_string(),
        target_market: "Early adopters and tech-savvy users".to_string(),
        problem_solved: trend.description.clone(),
        revenue_model: "SaaS subscription model".to_string(),
        key_features: vec![
            "Feature 1".to_string(),
            "Feature 2".to_string(),
            "Feature 3".to_string(),
        ],
        source_trends: vec![trend.id],
        generated_at: Utc::now(),
    }
}

/// Template strategy: one idea per keyword theme, no network calls.
#[derive(Debug, Default)]
pub struct TemplateIdeaGenerator;

impl TemplateIdeaGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Groups trends by their first keyword and produces one idea per group,
    /// up to `max_ideas`. Trends without keywords are skipped. Output count
    /// is `min(#groups, max_ideas)`.
    #[must_use]
    pub fn generate(&self, trends: &[Trend], max_ideas: usize) -> Vec<BusinessIdea> {
        let mut groups: Vec<(String, Vec<&Trend>)> = Vec::new();
        for trend in trends {
            let Some(theme) = trend.keywords.first() else {
                continue;
            };
            match groups.iter_mut().find(|(t, _)| t == theme) {
                Some((_, members)) => members.push(trend),
                None => groups.push((theme.clone(), vec![trend])),
            }
        }

        groups
            .into_iter()
            .take(max_ideas)
            .map(|(theme, members)| {
                let template = template_for(&theme);
                BusinessIdea {
                    id: Uuid::new_v4(),
                    title: template.title,
                    description: template.description,
                    value_proposition: template.value_proposition,
                    target_market: template.target_market,
                    problem_solved: template.problem_solved,
                    revenue_model: template.revenue_model,
                    key_features: template.key_features,
                    source_trends: members.iter().map(|t| t.id).collect(),
                    generated_at: Utc::now(),
                }
            })
            .collect()
    }
}

/// Shape the model is asked to return. Missing fields fall back to safe
/// defaults rather than failing the parse.
#[derive(Debug, Deserialize)]
struct IdeaDraft {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    value_proposition: String,
    #[serde(default)]
    target_market: String,
    #[serde(default)]
    problem_solved: String,
    #[serde(default)]
    revenue_model: String,
    #[serde(default)]
    key_features: Vec<String>,
}

fn default_title() -> String {
    "Untitled Idea".to_string()
}

/// LLM strategy: one chat completion per selected trend, run concurrently.
pub struct LlmIdeaGenerator {
    client: ChatClient,
}

impl LlmIdeaGenerator {
    #[must_use]
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Generates one idea per top-ranked trend. Generation failures are
    /// logged and replaced with [`fallback_idea`], so the output count
    /// always equals `min(len(trends), max_ideas)` and preserves the
    /// ranking order of [`select_top_trends`].
    pub async fn generate(&self, trends: &[Trend], max_ideas: usize) -> Vec<BusinessIdea> {
        let top = select_top_trends(trends, max_ideas);
        tracing::info!(
            candidates = trends.len(),
            selected = top.len(),
            model = self.client.model(),
            "generating ideas"
        );

        let tasks = top.iter().map(|trend| self.generate_one(trend));
        futures::future::join_all(tasks).await
    }

    async fn generate_one(&self, trend: &Trend) -> BusinessIdea {
        match self.try_generate(trend).await {
            Ok(idea) => idea,
            Err(e) => {
                tracing::warn!(
                    trend = %trend.title,
                    error = %e,
                    "idea generation failed, substituting fallback idea"
                );
                fallback_idea(trend)
            }
        }
    }

    async fn try_generate(&self, trend: &Trend) -> Result<BusinessIdea, LlmError> {
        let prompt = user_prompt(trend);
        let value = self
            .client
            .generate_json(Some(SYSTEM_PROMPT), &prompt, GENERATION_TEMPERATURE)
            .await?;

        let draft: IdeaDraft = serde_json::from_value(value).map_err(|source| LlmError::Json {
            context: format!("idea draft for trend '{}'", trend.title),
            source,
        })?;

        Ok(BusinessIdea {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            value_proposition: draft.value_proposition,
            target_market: draft.target_market,
            problem_solved: draft.problem_solved,
            revenue_model: draft.revenue_model,
            key_features: draft.key_features,
            source_trends: vec![trend.id],
            generated_at: Utc::now(),
        })
    }
}

fn user_prompt(trend: &Trend) -> String {
    format!(
        "Based on this trend, generate a business idea:\n\n\
Trend: {title}\n\
Description: {description}\n\
Keywords: {keywords}\n\
Engagement Level: {engagement}\n\
Sentiment: {sentiment:+.2}\n\n\
Generate a business idea that addresses this trend. Return a JSON object with:\n\
{{\n\
  \"title\": \"Clear, concise business name\",\n\
  \"description\": \"1-2 sentence description of the business\",\n\
  \"value_proposition\": \"What value does this provide to customers?\",\n\
  \"target_market\": \"Who is the ideal customer?\",\n\
  \"problem_solved\": \"What specific problem does this solve?\",\n\
  \"revenue_model\": \"How will this make money?\",\n\
  \"key_features\": [\"feature1\", \"feature2\", \"feature3\"]\n\
}}\n\n\
Be specific and practical. Focus on ideas that could be launched in 3-6 months.",
        title = trend.title,
        description = trend.description,
        keywords = trend.keywords.join(", "),
        engagement = trend.engagement,
        sentiment = trend.sentiment,
    )
}
