use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Network failure, non-2xx status, or a response body that did not
    /// decode as the expected shape.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
