//! NewsAPI top-headlines fetcher. Only runs when an API key is configured.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use scout_core::{Trend, TrendSource};

use crate::error::SourceError;
use crate::keywords::{extract_keywords, truncate_chars};

const MAX_TRENDS: usize = 5;
// NewsAPI exposes no engagement signal; every headline gets a flat value so
// news trends stay comparable with the other feeds.
const FIXED_ENGAGEMENT: u64 = 1000;

#[derive(Debug, Deserialize)]
struct Headlines {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

pub(crate) async fn fetch_top_headlines(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
) -> Result<Vec<Trend>, SourceError> {
    let headlines: Headlines = client
        .get(format!("{base_url}/v2/top-headlines"))
        .query(&[
            ("apiKey", api_key),
            ("category", "technology"),
            ("language", "en"),
            ("pageSize", "10"),
        ])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let trends = headlines
        .articles
        .into_iter()
        .take(MAX_TRENDS)
        .map(|article| Trend {
            id: Uuid::new_v4(),
            source: TrendSource::News,
            keywords: extract_keywords(&article.title),
            description: truncate_chars(article.description.as_deref().unwrap_or(""), 200),
            title: article.title,
            url: article.url,
            sentiment: 0.7,
            engagement: FIXED_ENGAGEMENT,
            discovered_at: Utc::now(),
        })
        .collect();

    Ok(trends)
}
