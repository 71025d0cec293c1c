//! Fixed idea catalog for the template generation strategy.

pub(crate) struct IdeaTemplate {
    pub title: String,
    pub description: String,
    pub value_proposition: String,
    pub target_market: String,
    pub problem_solved: String,
    pub revenue_model: String,
    pub key_features: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Look up the idea template for a theme keyword, falling back to a generic
/// template built from the theme itself. Total: every theme maps to a
/// template.
pub(crate) fn template_for(theme: &str) -> IdeaTemplate {
    match theme.to_lowercase().as_str() {
        "ai" => IdeaTemplate {
            title: "AI-Powered Code Review Assistant".to_string(),
            description:
                "An intelligent code review tool that helps developers write better code faster"
                    .to_string(),
            value_proposition:
                "Reduce code review time by 50% and catch bugs before they reach production"
                    .to_string(),
            target_market: "Software development teams at startups and mid-size companies"
                .to_string(),
            problem_solved: "Manual code reviews are time-consuming and inconsistent".to_string(),
            revenue_model: "SaaS subscription: $50/developer/month".to_string(),
            key_features: owned(&[
                "Automated code quality analysis",
                "AI-powered bug detection",
                "Best practice recommendations",
                "Integration with GitHub/GitLab",
            ]),
        },
        "remote work" => IdeaTemplate {
            title: "Hybrid Team Sync Platform".to_string(),
            description:
                "A platform designed specifically for hybrid teams to stay connected and productive"
                    .to_string(),
            value_proposition:
                "Bridge the gap between remote and in-office workers with seamless collaboration"
                    .to_string(),
            target_market: "Companies with 50-500 employees adopting hybrid work models"
                .to_string(),
            problem_solved:
                "Hybrid teams struggle with communication gaps and unequal access to information"
                    .to_string(),
            revenue_model: "Freemium: free for up to 10 users, $15/user/month for teams"
                .to_string(),
            key_features: owned(&[
                "Office presence dashboard",
                "Asynchronous standup meetings",
                "Team availability calendar",
                "Context-aware notifications",
            ]),
        },
        "sustainability" => IdeaTemplate {
            title: "Carbon Footprint Tracker for Developers".to_string(),
            description:
                "Help developers understand and reduce the environmental impact of their code"
                    .to_string(),
            value_proposition:
                "Make your codebase more efficient and reduce cloud costs while helping the planet"
                    .to_string(),
            target_market: "Environmentally conscious tech companies and open source projects"
                .to_string(),
            problem_solved:
                "Developers lack visibility into the energy consumption of their applications"
                    .to_string(),
            revenue_model: "Usage-based: free tier + $0.10 per 1000 analysis runs".to_string(),
            key_features: owned(&[
                "Real-time energy consumption metrics",
                "Optimization recommendations",
                "Carbon offset calculations",
                "CI/CD integration",
            ]),
        },
        "personal finance" => IdeaTemplate {
            title: "AI Budget Coach".to_string(),
            description:
                "A conversational AI that helps people stick to their budgets and achieve financial goals"
                    .to_string(),
            value_proposition:
                "Get personalized financial advice without expensive financial advisors"
                    .to_string(),
            target_market: "Millennials and Gen Z looking to improve their financial health"
                .to_string(),
            problem_solved:
                "Traditional budgeting apps are passive and don't provide actionable coaching"
                    .to_string(),
            revenue_model: "Subscription: $9.99/month or $89/year".to_string(),
            key_features: owned(&[
                "AI chat interface for financial questions",
                "Automatic spending categorization",
                "Personalized savings goals",
                "Bill negotiation assistance",
            ]),
        },
        lower => generic_template(lower),
    }
}

fn generic_template(theme: &str) -> IdeaTemplate {
    let display = scout_core::capitalize(theme);
    IdeaTemplate {
        title: format!("{display} Solution Platform"),
        description: format!("A platform addressing {theme} needs"),
        value_proposition: format!("Solve key challenges in the {theme} space"),
        target_market: format!("Businesses and individuals in the {theme} market"),
        problem_solved: format!("Current {theme} solutions are inadequate"),
        revenue_model: "SaaS subscription model".to_string(),
        key_features: owned(&["Feature 1", "Feature 2", "Feature 3"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_theme_uses_catalog_entry() {
        let template = template_for("AI");
        assert_eq!(template.title, "AI-Powered Code Review Assistant");
        assert_eq!(template.key_features.len(), 4);
    }

    #[test]
    fn unknown_theme_builds_generic_template() {
        let template = template_for("quantum");
        assert_eq!(template.title, "Quantum Solution Platform");
        assert_eq!(template.description, "A platform addressing quantum needs");
        assert_eq!(template.key_features.len(), 3);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            template_for("Sustainability").title,
            "Carbon Footprint Tracker for Developers"
        );
    }
}
