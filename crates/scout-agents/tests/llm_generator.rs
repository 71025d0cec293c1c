//! Integration tests for LLM-backed idea generation against a mock
//! chat-completion server.

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scout_agents::LlmIdeaGenerator;
use scout_core::{Trend, TrendSource};
use scout_llm::ChatClient;

fn trend(title: &str, keyword: &str, engagement: u64) -> Trend {
    Trend {
        id: Uuid::new_v4(),
        source: TrendSource::HackerNews,
        title: title.to_string(),
        description: format!("description of {title}"),
        url: None,
        sentiment: 0.7,
        engagement,
        keywords: vec![keyword.to_string()],
        discovered_at: Utc::now(),
    }
}

fn generator(server: &MockServer) -> LlmIdeaGenerator {
    let client = ChatClient::with_base_url("test-token", "gpt-4o-mini", 5, &server.uri())
        .expect("mock client");
    LlmIdeaGenerator::new(client)
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
}

#[tokio::test]
async fn parses_generated_idea_fields() {
    let server = MockServer::start().await;

    let idea_json = json!({
        "title": "DevOps Copilot",
        "description": "An assistant for CI pipelines.",
        "value_proposition": "Cuts pipeline debugging time in half",
        "target_market": "Software development teams",
        "problem_solved": "Flaky builds waste engineering hours",
        "revenue_model": "Per-seat SaaS subscription",
        "key_features": ["Failure triage", "Pipeline insights", "Slack alerts"]
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body(&idea_json.to_string())),
        )
        .mount(&server)
        .await;

    let trends = vec![trend("CI tooling on the rise", "devops", 900)];
    let ideas = generator(&server).generate(&trends, 5).await;

    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].title, "DevOps Copilot");
    assert_eq!(ideas[0].target_market, "Software development teams");
    assert_eq!(ideas[0].key_features.len(), 3);
    assert_eq!(ideas[0].source_trends, vec![trends[0].id]);
}

#[tokio::test]
async fn fenced_json_is_accepted() {
    let server = MockServer::start().await;

    let content = "```json\n{\"title\": \"Fenced Idea\", \"key_features\": []}\n```";
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(&server)
        .await;

    let trends = vec![trend("Some trend", "ai", 100)];
    let ideas = generator(&server).generate(&trends, 1).await;

    assert_eq!(ideas[0].title, "Fenced Idea");
}

#[tokio::test]
async fn api_failure_substitutes_fallback_ideas() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let trends = vec![
        trend("AI agents everywhere", "agents", 900),
        trend("Remote work shifts", "remote", 400),
    ];
    let ideas = generator(&server).generate(&trends, 5).await;

    // Failures never reduce the output count.
    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[0].title, "Solution for Agents Space");
    assert_eq!(ideas[0].source_trends, vec![trends[0].id]);
    assert_eq!(ideas[1].title, "Solution for Remote Space");
}

#[tokio::test]
async fn unparseable_output_falls_back_per_trend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("Sure! Here is an idea.")),
        )
        .mount(&server)
        .await;

    let trends = vec![trend("Unstructured output", "chaos", 50)];
    let ideas = generator(&server).generate(&trends, 1).await;

    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].title, "Solution for Chaos Space");
}

#[tokio::test]
async fn respects_max_ideas_cap() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("{\"title\": \"Capped\", \"key_features\": []}")),
        )
        .mount(&server)
        .await;

    let trends = vec![
        trend("one", "a", 300),
        trend("two", "b", 200),
        trend("three", "c", 100),
    ];
    let ideas = generator(&server).generate(&trends, 2).await;

    assert_eq!(ideas.len(), 2);
}
