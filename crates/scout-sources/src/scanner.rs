//! Concurrent trend scan across all configured feeds.

use std::time::Duration;

use scout_core::{AppConfig, Trend, TrendSource};

use crate::error::SourceError;
use crate::sources::{github_trending, hacker_news, news_api, reddit};

const HN_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";
const REDDIT_BASE_URL: &str = "https://www.reddit.com";
const GITHUB_BASE_URL: &str = "https://github.com";
const NEWS_BASE_URL: &str = "https://newsapi.org";

/// Result of one feed fetch, kept per-source so partial failure is explicit
/// rather than swallowed.
#[derive(Debug)]
pub struct ScanOutcome {
    pub source: TrendSource,
    pub result: Result<Vec<Trend>, SourceError>,
}

/// Scans all external feeds for trends.
///
/// Holds the shared HTTP client and per-feed base URLs; the `with_*_base_url`
/// builders point individual feeds at a mock server in tests.
pub struct TrendScanner {
    client: reqwest::Client,
    hn_base_url: String,
    reddit_base_url: String,
    github_base_url: String,
    news_base_url: String,
    news_api_key: Option<String>,
    reddit_user_agent: String,
    trends: Vec<Trend>,
}

impl TrendScanner {
    /// Creates a scanner from application config.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            hn_base_url: HN_BASE_URL.to_string(),
            reddit_base_url: REDDIT_BASE_URL.to_string(),
            github_base_url: GITHUB_BASE_URL.to_string(),
            news_base_url: NEWS_BASE_URL.to_string(),
            news_api_key: config.news_api_key.clone(),
            reddit_user_agent: config.reddit_user_agent.clone(),
            trends: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_hn_base_url(mut self, base_url: &str) -> Self {
        self.hn_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_reddit_base_url(mut self, base_url: &str) -> Self {
        self.reddit_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_github_base_url(mut self, base_url: &str) -> Self {
        self.github_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_news_base_url(mut self, base_url: &str) -> Self {
        self.news_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Runs every configured fetcher concurrently and returns one outcome
    /// per source, in fixed source order. Does not store results; use
    /// [`TrendScanner::scan`] for the aggregating entry point.
    pub async fn scan_detailed(&self) -> Vec<ScanOutcome> {
        let news_fut = async {
            match &self.news_api_key {
                Some(key) => Some(
                    news_api::fetch_top_headlines(&self.client, &self.news_base_url, key).await,
                ),
                None => None,
            }
        };

        let (hn, reddit, github, news) = tokio::join!(
            hacker_news::fetch_trends(&self.client, &self.hn_base_url),
            reddit::fetch_trends(&self.client, &self.reddit_base_url, &self.reddit_user_agent),
            github_trending::fetch_trends(&self.client, &self.github_base_url),
            news_fut,
        );

        let mut outcomes = vec![
            ScanOutcome {
                source: TrendSource::HackerNews,
                result: hn,
            },
            ScanOutcome {
                source: TrendSource::Reddit,
                result: reddit,
            },
            ScanOutcome {
                source: TrendSource::GithubTrending,
                result: github,
            },
        ];

        if let Some(result) = news {
            outcomes.push(ScanOutcome {
                source: TrendSource::News,
                result,
            });
        }

        outcomes
    }

    /// Scans all feeds, concatenating successful results in source order.
    ///
    /// A failing source is logged and contributes zero trends; the scan
    /// itself never fails. The result is also stored for
    /// [`TrendScanner::top_trends`].
    pub async fn scan(&mut self) -> Vec<Trend> {
        let outcomes = self.scan_detailed().await;

        let mut all_trends = Vec::new();
        for outcome in outcomes {
            match outcome.result {
                Ok(trends) => {
                    tracing::debug!(
                        source = %outcome.source,
                        count = trends.len(),
                        "collected trends"
                    );
                    all_trends.extend(trends);
                }
                Err(e) => {
                    tracing::warn!(
                        source = %outcome.source,
                        error = %e,
                        "trend fetch failed"
                    );
                }
            }
        }

        tracing::info!(count = all_trends.len(), "trend scan complete");
        self.trends = all_trends.clone();
        all_trends
    }

    /// Trends collected by the last [`TrendScanner::scan`] call.
    #[must_use]
    pub fn trends(&self) -> &[Trend] {
        &self.trends
    }

    /// Top `limit` stored trends by engagement, descending.
    #[must_use]
    pub fn top_trends(&self, limit: usize) -> Vec<Trend> {
        top_trends(&self.trends, limit)
    }
}

/// Sort trends by engagement descending and return the first `limit`.
///
/// The sort is stable: trends with equal engagement keep their insertion
/// order. This is the only ordering contract downstream stages rely on.
#[must_use]
pub fn top_trends(trends: &[Trend], limit: usize) -> Vec<Trend> {
    let mut sorted = trends.to_vec();
    sorted.sort_by(|a, b| b.engagement.cmp(&a.engagement));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn trend(title: &str, engagement: u64, sentiment: f64) -> Trend {
        Trend {
            id: Uuid::new_v4(),
            source: TrendSource::Other,
            title: title.to_string(),
            description: String::new(),
            url: None,
            sentiment,
            engagement,
            keywords: Vec::new(),
            discovered_at: Utc::now(),
        }
    }

    #[test]
    fn top_trends_sorts_by_engagement_descending() {
        let trends = vec![
            trend("a", 15_000, 0.75),
            trend("b", 8_500, 0.3),
            trend("c", 25_000, 0.85),
            trend("d", 50_000, 0.65),
        ];

        let top = top_trends(&trends, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].engagement, 50_000);
        assert_eq!(top[1].engagement, 25_000);
    }

    #[test]
    fn top_trends_is_stable_for_ties() {
        let trends = vec![
            trend("first", 100, 0.0),
            trend("second", 100, 0.0),
            trend("third", 200, 0.0),
        ];

        let top = top_trends(&trends, 3);
        assert_eq!(top[0].title, "third");
        assert_eq!(top[1].title, "first");
        assert_eq!(top[2].title, "second");
    }

    #[test]
    fn top_trends_limit_exceeding_len_returns_all() {
        let trends = vec![trend("only", 1, 0.0)];
        assert_eq!(top_trends(&trends, 10).len(), 1);
    }
}
