//! Integration tests for `TrendScanner` using wiremock HTTP mocks.
//!
//! All feed paths are distinct, so one mock server can stand in for every
//! upstream at once.

use std::path::PathBuf;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scout_core::{AppConfig, TrendSource};
use scout_sources::TrendScanner;

fn test_config(news_api_key: Option<&str>) -> AppConfig {
    AppConfig {
        github_token: None,
        llm_model: "gpt-4o-mini".to_string(),
        news_api_key: news_api_key.map(ToString::to_string),
        slack_webhook_url: None,
        reddit_user_agent: "business-scout/0.1 (test)".to_string(),
        request_timeout_secs: 5,
        max_ideas_per_run: 10,
        validation_budget_per_idea: 500.0,
        validation_duration_days: 7,
        schedule_cron: "0 0 8 * * *".to_string(),
        data_dir: PathBuf::from("./data"),
        log_level: "info".to_string(),
    }
}

fn scanner_for(server: &MockServer, config: &AppConfig) -> TrendScanner {
    TrendScanner::new(config)
        .expect("client construction should not fail")
        .with_hn_base_url(&server.uri())
        .with_reddit_base_url(&server.uri())
        .with_github_base_url(&server.uri())
        .with_news_base_url(&server.uri())
}

async fn mount_hacker_news(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/item/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "Kubernetes operators explained",
            "score": 320,
            "descendants": 140
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/item/2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "Kubernetes cost optimization at scale",
            "score": 210,
            "descendants": 55
        })))
        .mount(server)
        .await;
}

async fn mount_reddit(server: &MockServer) {
    let listing = serde_json::json!({
        "data": {
            "children": [
                {
                    "data": {
                        "title": "Why we rewrote our billing service",
                        "selftext": "A long story about invoices.",
                        "score": 850,
                        "num_comments": 230,
                        "permalink": "/r/programming/comments/abc/billing/"
                    }
                }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/r/programming/hot.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&listing))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/r/technology/hot.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "children": [] }
        })))
        .mount(server)
        .await;
}

async fn mount_github(server: &MockServer) {
    let html = r#"
<article class="Box-row">
  <h2 class="h3"><a href="/acme/launchpad">acme / launchpad</a></h2>
  <p class="col-9 color-fg-muted my-1 pr-4">Deploy previews for every branch.</p>
  <a href="/acme/launchpad/stargazers">4,200</a>
</article>
"#;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

#[tokio::test]
async fn hacker_news_groups_stories_by_keyword() {
    let server = MockServer::start().await;
    mount_hacker_news(&server).await;
    mount_reddit(&server).await;
    mount_github(&server).await;

    let mut scanner = scanner_for(&server, &test_config(None));
    let trends = scanner.scan().await;

    let hn: Vec<_> = trends
        .iter()
        .filter(|t| t.source == TrendSource::HackerNews)
        .collect();
    assert!(!hn.is_empty());

    // Both stories mention "kubernetes", so its group aggregates both.
    let kubernetes = hn
        .iter()
        .find(|t| t.keywords.first().map(String::as_str) == Some("kubernetes"))
        .expect("kubernetes keyword group");
    assert_eq!(kubernetes.engagement, 320 + 140 + 210 + 55);
    assert_eq!(kubernetes.title, "Kubernetes Trending on Hacker News");
    assert!((kubernetes.sentiment - 0.7).abs() < f64::EPSILON);
}

#[tokio::test]
async fn reddit_posts_become_trends() {
    let server = MockServer::start().await;
    mount_hacker_news(&server).await;
    mount_reddit(&server).await;
    mount_github(&server).await;

    let mut scanner = scanner_for(&server, &test_config(None));
    let trends = scanner.scan().await;

    let billing = trends
        .iter()
        .find(|t| t.title == "Why we rewrote our billing service")
        .expect("reddit trend present");
    assert_eq!(billing.source, TrendSource::Reddit);
    assert_eq!(billing.engagement, 850 + 230);
    assert_eq!(billing.description, "A long story about invoices.");
    assert_eq!(
        billing.url.as_deref(),
        Some("https://www.reddit.com/r/programming/comments/abc/billing/")
    );
}

#[tokio::test]
async fn github_trending_is_scraped() {
    let server = MockServer::start().await;
    mount_hacker_news(&server).await;
    mount_reddit(&server).await;
    mount_github(&server).await;

    let mut scanner = scanner_for(&server, &test_config(None));
    let trends = scanner.scan().await;

    let repo = trends
        .iter()
        .find(|t| t.title == "GitHub: acme/launchpad")
        .expect("github trend present");
    assert_eq!(repo.source, TrendSource::GithubTrending);
    assert_eq!(repo.engagement, 4_200);
    assert_eq!(repo.description, "Deploy previews for every branch.");
}

#[tokio::test]
async fn failing_source_is_skipped_not_fatal() {
    let server = MockServer::start().await;
    mount_hacker_news(&server).await;
    mount_github(&server).await;

    // Reddit answers 500 for every subreddit.
    Mock::given(method("GET"))
        .and(path("/r/programming/hot.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/r/technology/hot.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut scanner = scanner_for(&server, &test_config(None));
    let trends = scanner.scan().await;

    assert!(trends.iter().all(|t| t.source != TrendSource::Reddit));
    assert!(trends.iter().any(|t| t.source == TrendSource::HackerNews));
    assert!(trends
        .iter()
        .any(|t| t.source == TrendSource::GithubTrending));
}

#[tokio::test]
async fn news_api_runs_only_with_key() {
    let server = MockServer::start().await;
    mount_hacker_news(&server).await;
    mount_reddit(&server).await;
    mount_github(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .and(query_param("apiKey", "news-test-key"))
        .and(query_param("category", "technology"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "articles": [
                { "title": "Chipmaker announces new fab", "description": "Capacity doubles." }
            ]
        })))
        .mount(&server)
        .await;

    // Without a key the news fetcher does not run at all.
    let mut scanner = scanner_for(&server, &test_config(None));
    let trends = scanner.scan().await;
    assert!(trends.iter().all(|t| t.source != TrendSource::News));

    let mut scanner = scanner_for(&server, &test_config(Some("news-test-key")));
    let trends = scanner.scan().await;
    let article = trends
        .iter()
        .find(|t| t.source == TrendSource::News)
        .expect("news trend present");
    assert_eq!(article.title, "Chipmaker announces new fab");
    assert_eq!(article.engagement, 1000);
}

#[tokio::test]
async fn top_trends_uses_stored_scan_results() {
    let server = MockServer::start().await;
    mount_hacker_news(&server).await;
    mount_reddit(&server).await;
    mount_github(&server).await;

    let mut scanner = scanner_for(&server, &test_config(None));
    let trends = scanner.scan().await;
    assert_eq!(scanner.trends().len(), trends.len());

    let top = scanner.top_trends(2);
    assert_eq!(top.len(), 2);
    assert!(top[0].engagement >= top[1].engagement);
}
