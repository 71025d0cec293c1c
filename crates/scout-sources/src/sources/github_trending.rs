//! GitHub trending page scraper.
//!
//! The trending page has no API, so repository name, description, and star
//! count are pulled out of the HTML with regexes.

use chrono::Utc;
use regex::Regex;
use uuid::Uuid;

use scout_core::{Trend, TrendSource};

use crate::error::SourceError;
use crate::keywords::{extract_keywords, truncate_chars};

const MAX_REPOS: usize = 5;

pub(crate) async fn fetch_trends(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<Trend>, SourceError> {
    let html = client
        .get(format!("{base_url}/trending"))
        .header("User-Agent", "Mozilla/5.0")
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(parse_trending(&html, base_url))
}

/// Parse the trending page HTML into trends. Unrecognised markup simply
/// yields fewer results; this never fails.
pub(crate) fn parse_trending(html: &str, base_url: &str) -> Vec<Trend> {
    let article_re =
        Regex::new(r#"(?s)<article class="Box-row".*?</article>"#).expect("valid article regex");
    let name_re =
        Regex::new(r#"(?s)<h2[^>]*>.*?<a[^>]*href="/([^"]+)""#).expect("valid repo name regex");
    let desc_re =
        Regex::new(r#"(?s)<p class="col-9[^"]*"[^>]*>(.*?)</p>"#).expect("valid description regex");
    let stars_re =
        Regex::new(r#"(?s)href="/[^"]+/stargazers"[^>]*>(.*?)</a>"#).expect("valid stars regex");

    let mut trends = Vec::new();

    for article in article_re.find_iter(html).take(MAX_REPOS) {
        let block = article.as_str();

        let Some(name) = name_re
            .captures(block)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
        else {
            continue;
        };

        let description = desc_re
            .captures(block)
            .and_then(|c| c.get(1))
            .map(|m| collapse_whitespace(&strip_tags(m.as_str())))
            .unwrap_or_default();

        let stars = stars_re
            .captures(block)
            .and_then(|c| c.get(1))
            .map(|m| parse_star_count(m.as_str()))
            .unwrap_or(0);

        trends.push(Trend {
            id: Uuid::new_v4(),
            source: TrendSource::GithubTrending,
            title: format!("GitHub: {name}"),
            description: truncate_chars(&description, 200),
            url: Some(format!("{base_url}/{name}")),
            sentiment: 0.8,
            engagement: stars,
            keywords: extract_keywords(&format!("{name} {description}")),
            discovered_at: Utc::now(),
        });
    }

    trends
}

fn strip_tags(html: &str) -> String {
    let tag_re = Regex::new(r"(?s)<[^>]+>").expect("valid tag regex");
    tag_re.replace_all(html, " ").to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Star counts render as e.g. `"12,345"` with surrounding markup noise.
fn parse_star_count(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
<article class="Box-row">
  <h2 class="h3 lh-condensed">
    <a href="/rust-lang/rust" data-view-component="true">
      rust-lang / rust
    </a>
  </h2>
  <p class="col-9 color-fg-muted my-1 pr-4">
    Empowering everyone to build reliable and <em>efficient</em> software.
  </p>
  <a href="/rust-lang/rust/stargazers" class="Link--muted">
    <svg aria-label="star"></svg>
    98,123
  </a>
</article>
<article class="Box-row">
  <h2 class="h3 lh-condensed">
    <a href="/example/widget">example / widget</a>
  </h2>
  <a href="/example/widget/stargazers">512</a>
</article>
"#;

    #[test]
    fn parses_name_description_and_stars() {
        let trends = parse_trending(SAMPLE, "https://github.com");
        assert_eq!(trends.len(), 2);

        let first = &trends[0];
        assert_eq!(first.title, "GitHub: rust-lang/rust");
        assert_eq!(first.engagement, 98_123);
        assert_eq!(
            first.description,
            "Empowering everyone to build reliable and efficient software."
        );
        assert_eq!(first.url.as_deref(), Some("https://github.com/rust-lang/rust"));
        assert!((first.sentiment - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_description_yields_empty_string() {
        let trends = parse_trending(SAMPLE, "https://github.com");
        assert_eq!(trends[1].title, "GitHub: example/widget");
        assert!(trends[1].description.is_empty());
        assert_eq!(trends[1].engagement, 512);
    }

    #[test]
    fn garbage_html_yields_no_trends() {
        assert!(parse_trending("<html><body>nothing here</body></html>", "x").is_empty());
    }

    #[test]
    fn star_count_ignores_commas_and_markup() {
        assert_eq!(parse_star_count("\n  12,345 "), 12_345);
        assert_eq!(parse_star_count("no digits"), 0);
    }
}
