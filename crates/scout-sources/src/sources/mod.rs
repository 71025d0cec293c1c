//! One fetcher per external feed.

pub(crate) mod github_trending;
pub(crate) mod hacker_news;
pub(crate) mod news_api;
pub(crate) mod reddit;
