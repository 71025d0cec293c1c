//! Keyword extraction and small text helpers shared by the feed fetchers.

/// Common words excluded from keyword extraction.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "in", "on", "at", "to", "for", "of", "and", "or", "is", "are", "was", "were",
    "be", "been", "being", "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "with", "from", "by", "this", "that", "these", "those",
];

const MAX_KEYWORDS: usize = 5;

/// Extract up to five keywords from free text.
///
/// Lowercases, strips non-alphanumeric characters, drops stop words and
/// words of three characters or fewer, and deduplicates while preserving
/// first-occurrence order.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        let cleaned: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        if cleaned.len() <= 3 || STOP_WORDS.contains(&cleaned.as_str()) {
            continue;
        }
        if !keywords.contains(&cleaned) {
            keywords.push(cleaned);
        }
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }

    keywords
}

/// Truncate a string to at most `max_chars` characters, respecting char
/// boundaries.
#[must_use]
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
