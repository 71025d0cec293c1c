use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat API error: {0}")]
    Api(String),

    #[error("chat response contained no choices")]
    EmptyResponse,

    #[error("failed to parse model output as JSON ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
