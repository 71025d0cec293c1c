//! Slack webhook notifications for pipeline progress.
//!
//! Notification failures are logged and swallowed: a dead webhook must
//! never fail a pipeline run.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

use scout_core::{BusinessAnalysis, BusinessIdea, ScoutReport};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const TOP_IDEAS_IN_REPORT: usize = 3;

/// Posts run updates to a Slack incoming webhook.
///
/// Constructed from the optional webhook URL in the app config; without a
/// URL every notify call is a no-op.
pub struct SlackNotifier {
    client: Client,
    webhook_url: Option<String>,
}

impl SlackNotifier {
    #[must_use]
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }

    /// Whether a webhook URL is configured.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    pub async fn notify_pipeline_start(&self) {
        self.post(&json!({
            "text": ":rocket: Business scout pipeline started"
        }))
        .await;
    }

    pub async fn notify_phase(&self, phase: &str, detail: &str) {
        self.post(&json!({
            "text": format!(":white_check_mark: {phase}: {detail}")
        }))
        .await;
    }

    /// Posts the run summary plus the top ideas ranked by engagement
    /// score. A validation whose idea id no longer resolves is skipped.
    pub async fn notify_report(&self, report: &ScoutReport, report_path: &str) {
        let summary = report.summary;
        let header = format!(
            ":memo: *Business scout run complete*\nTrends: *{}* | Ideas: *{}* | Promising: *{}/{}*",
            summary.trends_analyzed,
            summary.ideas_generated,
            summary.promising_ideas,
            summary.ideas_validated
        );

        let mut attachments = Vec::new();
        if !report.top_recommendations.is_empty() {
            attachments.push(json!({
                "color": "#2eb886",
                "title": ":trophy: Top Recommendations",
                "text": report.top_recommendations.join("\n"),
            }));
        }

        let ideas_by_id: HashMap<Uuid, &BusinessIdea> =
            report.ideas.iter().map(|i| (i.id, i)).collect();
        let analyses_by_idea: HashMap<Uuid, &BusinessAnalysis> =
            report.analyses.iter().map(|a| (a.idea_id, a)).collect();

        let mut ranked: Vec<_> = report.validations.iter().collect();
        ranked.sort_by(|a, b| {
            b.metrics
                .engagement_score
                .total_cmp(&a.metrics.engagement_score)
        });

        for (rank, validation) in ranked.iter().take(TOP_IDEAS_IN_REPORT).enumerate() {
            let Some(idea) = ideas_by_id.get(&validation.idea_id) else {
                continue;
            };
            let viability = analyses_by_idea.get(&validation.idea_id).map_or_else(
                || "N/A".to_string(),
                |a| format!("{:.1}/10", a.viability_score),
            );
            let (icon, color) = if validation.is_promising {
                (":white_check_mark:", "#36a64f")
            } else {
                (":warning:", "#ff9900")
            };

            attachments.push(json!({
                "color": color,
                "title": format!("{icon} #{}: {}", rank + 1, idea.title),
                "fields": [
                    { "title": "Value Proposition", "value": idea.value_proposition, "short": false },
                    { "title": "Viability Score", "value": viability, "short": true },
                    {
                        "title": "Engagement Score",
                        "value": format!("{:.1}/10", validation.metrics.engagement_score),
                        "short": true
                    },
                    {
                        "title": "CTR",
                        "value": format!("{:.2}%", validation.metrics.ctr * 100.0),
                        "short": true
                    },
                    {
                        "title": "Conversions",
                        "value": validation.metrics.conversions.to_string(),
                        "short": true
                    },
                ],
                "footer": format!(
                    "Confidence: {} | Report: {report_path}",
                    validation.confidence_level
                ),
            }));
        }

        self.post(&json!({ "text": header, "attachments": attachments }))
            .await;
    }

    pub async fn notify_failure(&self, phase: &str, error: &str) {
        self.post(&json!({
            "text": format!(":x: Pipeline failed during {phase}: {error}")
        }))
        .await;
    }

    async fn post(&self, payload: &serde_json::Value) {
        let Some(url) = &self.webhook_url else {
            return;
        };

        let result = self
            .client
            .post(url)
            .timeout(REQUEST_TIMEOUT)
            .json(payload)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(status = %response.status(), "slack notification rejected");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "slack notification failed");
            }
        }
    }
}
