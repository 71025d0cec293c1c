//! Hacker News top-stories fetcher.
//!
//! One GET for the top-story id list, then one GET per story. Stories are
//! grouped by extracted keyword; each keyword group becomes one [`Trend`]
//! whose engagement is the sum of score + comment count across its stories.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use scout_core::{capitalize, Trend, TrendSource};

use crate::error::SourceError;
use crate::keywords::{extract_keywords, truncate_chars};

const STORIES_TO_FETCH: usize = 5;
const MAX_TRENDS: usize = 3;

#[derive(Debug, Deserialize)]
struct Story {
    title: Option<String>,
    #[serde(default)]
    score: u64,
    #[serde(default)]
    descendants: u64,
}

pub(crate) async fn fetch_trends(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<Trend>, SourceError> {
    let ids: Vec<u64> = client
        .get(format!("{base_url}/topstories.json"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    // Keyword -> (title, engagement) pairs, in first-seen order.
    let mut groups: Vec<(String, Vec<(String, u64)>)> = Vec::new();

    for id in ids.iter().take(STORIES_TO_FETCH) {
        // Dead or deleted items come back as JSON null.
        let story: Option<Story> = client
            .get(format!("{base_url}/item/{id}.json"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(story) = story else { continue };
        let Some(title) = story.title else { continue };

        let engagement = story.score + story.descendants;
        for keyword in extract_keywords(&title) {
            match groups.iter_mut().find(|(k, _)| *k == keyword) {
                Some((_, stories)) => stories.push((title.clone(), engagement)),
                None => groups.push((keyword, vec![(title.clone(), engagement)])),
            }
        }
    }

    let mut trends = Vec::new();
    for (keyword, stories) in groups {
        let total_engagement: u64 = stories.iter().map(|(_, e)| e).sum();
        let joined_titles = stories
            .iter()
            .map(|(t, _)| t.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let mut trend_keywords = vec![keyword.clone()];
        for kw in extract_keywords(&joined_titles) {
            if !trend_keywords.contains(&kw) {
                trend_keywords.push(kw);
            }
        }

        trends.push(Trend {
            id: Uuid::new_v4(),
            source: TrendSource::HackerNews,
            title: format!("{} Trending on Hacker News", capitalize(&keyword)),
            description: format!(
                "Hacker News stories discussing {keyword}: {}",
                truncate_chars(&stories[0].0, 100)
            ),
            url: None,
            sentiment: 0.7,
            engagement: total_engagement,
            keywords: trend_keywords,
            discovered_at: Utc::now(),
        });
    }

    trends.truncate(MAX_TRENDS);
    Ok(trends)
}
