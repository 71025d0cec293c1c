//! Reddit public JSON fetcher. No OAuth; just the `/hot.json` listing of a
//! fixed set of tech subreddits with a custom User-Agent.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use scout_core::{Trend, TrendSource};

use crate::error::SourceError;
use crate::keywords::{extract_keywords, truncate_chars};

const SUBREDDITS: &[&str] = &["programming", "technology", "startups", "entrepreneur"];
// Only the first two subreddits are scanned per run to stay clear of the
// unauthenticated rate limit.
const SUBREDDITS_TO_SCAN: usize = 2;
const POSTS_PER_SUBREDDIT: usize = 5;
const MAX_TRENDS: usize = 5;

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    title: String,
    #[serde(default)]
    selftext: String,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    num_comments: i64,
    #[serde(default)]
    permalink: Option<String>,
}

pub(crate) async fn fetch_trends(
    client: &reqwest::Client,
    base_url: &str,
    user_agent: &str,
) -> Result<Vec<Trend>, SourceError> {
    let mut trends = Vec::new();

    for subreddit in SUBREDDITS.iter().take(SUBREDDITS_TO_SCAN) {
        let listing: Listing = client
            .get(format!("{base_url}/r/{subreddit}/hot.json"))
            .header("User-Agent", user_agent)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        for post in listing.data.children.into_iter().take(POSTS_PER_SUBREDDIT) {
            let data = post.data;
            // Downvoted posts can carry a negative score; floor at zero.
            #[allow(clippy::cast_sign_loss)]
            let engagement = (data.score + data.num_comments).max(0) as u64;

            trends.push(Trend {
                id: Uuid::new_v4(),
                source: TrendSource::Reddit,
                title: data.title.clone(),
                description: truncate_chars(&data.selftext, 200),
                url: data
                    .permalink
                    .map(|p| format!("https://www.reddit.com{p}")),
                sentiment: 0.6,
                engagement,
                keywords: extract_keywords(&data.title),
                discovered_at: Utc::now(),
            });
        }
    }

    trends.truncate(MAX_TRENDS);
    Ok(trends)
}
