//! Trend discovery for the business scout pipeline.
//!
//! Fans out concurrently to Hacker News, the Reddit public JSON API, the
//! GitHub trending page, and (when a key is configured) NewsAPI. Each
//! fetcher failure is logged and treated as zero results from that source;
//! a scan never aborts because one feed is down.

pub mod error;
pub mod keywords;
pub mod scanner;

mod sources;

pub use error::SourceError;
pub use keywords::extract_keywords;
pub use scanner::{top_trends, ScanOutcome, TrendScanner};
