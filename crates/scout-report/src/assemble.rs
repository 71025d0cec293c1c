//! Joins the outputs of all pipeline stages into one report document.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use scout_core::{
    BusinessAnalysis, BusinessIdea, ReportSummary, ScoutReport, Trend, ValidationResult,
};

/// Builds the final report from the stage outputs of one run.
///
/// Missing cross-references are tolerated: an idea without an analysis or
/// validation still appears in the report, it just cannot contribute a top
/// recommendation.
#[must_use]
pub fn assemble_report(
    trends: Vec<Trend>,
    ideas: Vec<BusinessIdea>,
    analyses: Vec<BusinessAnalysis>,
    validations: Vec<ValidationResult>,
) -> ScoutReport {
    let summary = ReportSummary {
        trends_analyzed: trends.len(),
        ideas_generated: ideas.len(),
        ideas_validated: validations.len(),
        promising_ideas: validations.iter().filter(|v| v.is_promising).count(),
    };

    tracing::info!(
        trends = summary.trends_analyzed,
        ideas = summary.ideas_generated,
        promising = summary.promising_ideas,
        "assembling report"
    );

    let top_recommendations = top_recommendations(&ideas, &analyses, &validations);

    ScoutReport {
        generated_at: Utc::now(),
        summary,
        trends,
        ideas,
        analyses,
        validations,
        top_recommendations,
    }
}

fn top_recommendations(
    ideas: &[BusinessIdea],
    analyses: &[BusinessAnalysis],
    validations: &[ValidationResult],
) -> Vec<String> {
    let ideas_by_id: HashMap<Uuid, &BusinessIdea> = ideas.iter().map(|i| (i.id, i)).collect();
    let analyses_by_idea: HashMap<Uuid, &BusinessAnalysis> =
        analyses.iter().map(|a| (a.idea_id, a)).collect();

    let promising: Vec<&ValidationResult> =
        validations.iter().filter(|v| v.is_promising).collect();

    if promising.is_empty() {
        return vec![
            "No idea achieved strong validation - consider refining approach".to_string(),
        ];
    }

    let mut recommendations = vec![format!(
        "{} out of {} ideas show strong market validation",
        promising.len(),
        validations.len()
    )];

    for validation in promising {
        let Some(idea) = ideas_by_id.get(&validation.idea_id) else {
            continue;
        };
        let viability = analyses_by_idea
            .get(&validation.idea_id)
            .map_or(0.0, |a| a.viability_score);
        recommendations.push(format!(
            "'{}' - viability {:.1}/10, engagement {:.1}/10",
            idea.title, viability, validation.metrics.engagement_score
        ));
    }

    recommendations
}
