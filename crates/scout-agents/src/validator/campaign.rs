//! Validation-campaign construction: ad copy, targeting, and platform
//! selection for one idea.

use chrono::Utc;

use scout_core::{AdCampaign, AdPlatform, BusinessIdea, CampaignStatus, Targeting};

/// Deterministic, total mapping from target-market text to an ad platform.
///
/// Developer/tech audiences search, so they go to Google; B2B audiences go
/// to LinkedIn; everything else defaults to Meta as the consumer platform.
#[must_use]
pub fn classify_platform(target_market: &str) -> AdPlatform {
    let target = target_market.to_lowercase();

    if target.contains("developer") || target.contains("software") || target.contains("tech") {
        AdPlatform::Google
    } else if target.contains("b2b") || target.contains("enterprise") || target.contains("business")
    {
        AdPlatform::Linkedin
    } else {
        AdPlatform::Meta
    }
}

pub(crate) fn build_campaign(
    idea: &BusinessIdea,
    budget: f64,
    duration_days: u32,
) -> AdCampaign {
    let short_id = idea.id.simple().to_string();
    AdCampaign {
        id: format!("campaign_{}", &short_id[..8]),
        idea_id: idea.id,
        platform: classify_platform(&idea.target_market),
        campaign_name: format!("Validation: {}", idea.title),
        ad_copy: ad_copy(idea),
        targeting: targeting(idea),
        budget,
        duration_days,
        status: CampaignStatus::Running,
        created_at: Utc::now(),
    }
}

fn ad_copy(idea: &BusinessIdea) -> String {
    let benefits = idea
        .key_features
        .iter()
        .take(3)
        .map(|f| format!("- {f}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{title}\n\n{value_proposition}\n\nKey benefits:\n{benefits}\n\nLearn more - limited early access!",
        title = idea.title,
        value_proposition = idea.value_proposition,
    )
}

fn targeting(idea: &BusinessIdea) -> Targeting {
    Targeting {
        interests: idea.key_features.clone(),
        age_min: 25,
        age_max: 55,
        locations: vec![
            "US".to_string(),
            "CA".to_string(),
            "UK".to_string(),
            "AU".to_string(),
        ],
        device_types: vec!["mobile".to_string(), "desktop".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn idea(target_market: &str) -> BusinessIdea {
        BusinessIdea {
            id: Uuid::new_v4(),
            title: "Test Idea".to_string(),
            description: String::new(),
            value_proposition: "Saves time".to_string(),
            target_market: target_market.to_string(),
            problem_solved: String::new(),
            revenue_model: String::new(),
            key_features: vec![
                "Fast".to_string(),
                "Cheap".to_string(),
                "Reliable".to_string(),
                "Extra".to_string(),
            ],
            source_trends: vec![Uuid::new_v4()],
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn developer_markets_map_to_google() {
        assert_eq!(
            classify_platform("Software development teams at startups"),
            AdPlatform::Google
        );
        assert_eq!(classify_platform("tech-savvy users"), AdPlatform::Google);
    }

    #[test]
    fn b2b_markets_map_to_linkedin() {
        assert_eq!(
            classify_platform("Enterprise procurement departments"),
            AdPlatform::Linkedin
        );
        assert_eq!(classify_platform("B2B sales orgs"), AdPlatform::Linkedin);
    }

    #[test]
    fn consumer_markets_map_to_meta() {
        assert_eq!(
            classify_platform("Millennials improving their finances"),
            AdPlatform::Meta
        );
        assert_eq!(classify_platform(""), AdPlatform::Meta);
    }

    #[test]
    fn developer_wins_over_business_keyword() {
        // "software" is checked before "business": total and deterministic.
        assert_eq!(
            classify_platform("business software buyers"),
            AdPlatform::Google
        );
    }

    #[test]
    fn campaign_embeds_idea_fields() {
        let idea = idea("consumers");
        let campaign = build_campaign(&idea, 500.0, 7);

        assert_eq!(campaign.idea_id, idea.id);
        assert_eq!(campaign.campaign_name, "Validation: Test Idea");
        assert!(campaign.id.starts_with("campaign_"));
        assert_eq!(campaign.id.len(), "campaign_".len() + 8);
        assert_eq!(campaign.status, CampaignStatus::Running);
        assert!((campaign.budget - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ad_copy_lists_first_three_features() {
        let campaign = build_campaign(&idea("consumers"), 500.0, 7);
        assert!(campaign.ad_copy.contains("- Fast"));
        assert!(campaign.ad_copy.contains("- Reliable"));
        assert!(!campaign.ad_copy.contains("- Extra"));
    }
}
