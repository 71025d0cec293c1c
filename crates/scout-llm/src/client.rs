//! HTTP client for the GitHub Models chat-completion endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

const DEFAULT_BASE_URL: &str = "https://models.inference.ai.azure.com";
const JSON_ONLY_INSTRUCTION: &str = "Respond ONLY with valid JSON. No markdown, no explanations.";
const JSON_MAX_TOKENS: u32 = 2000;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completion API.
///
/// Use [`ChatClient::new`] for the production GitHub Models endpoint or
/// [`ChatClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug)]
pub struct ChatClient {
    client: Client,
    token: String,
    model: String,
    base_url: Url,
}

impl ChatClient {
    /// Creates a client pointed at the GitHub Models endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, model: &str, timeout_secs: u64) -> Result<Self, LlmError> {
        Self::with_base_url(token, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the client cannot be constructed, or
    /// [`LlmError::Api`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        token: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // Normalise: exactly one trailing slash so join() appends rather than
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| LlmError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            token: token.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// The model name requests are issued against.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one system+user message pair and returns the assistant text.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Api`] on a non-2xx response.
    /// - [`LlmError::Http`] on network failure or an undecodable body.
    /// - [`LlmError::EmptyResponse`] if the API returns no choices.
    pub async fn generate(
        &self,
        system_prompt: Option<&str>,
        prompt: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let mut messages = Vec::new();
        if let Some(system) = system_prompt {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature,
            max_tokens,
        };

        let url = self
            .base_url
            .join("chat/completions")
            .map_err(|e| LlmError::Api(format!("invalid endpoint path: {e}")))?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!(
                "chat completion failed with status {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }

    /// Like [`ChatClient::generate`], but instructs the model to answer with
    /// a bare JSON object and parses the (fence-stripped) result.
    ///
    /// # Errors
    ///
    /// Everything [`ChatClient::generate`] returns, plus [`LlmError::Json`]
    /// when the output does not parse.
    pub async fn generate_json(
        &self,
        system_prompt: Option<&str>,
        prompt: &str,
        temperature: f64,
    ) -> Result<serde_json::Value, LlmError> {
        let system = match system_prompt {
            Some(s) => format!("{s}\n\n{JSON_ONLY_INSTRUCTION}"),
            None => JSON_ONLY_INSTRUCTION.to_string(),
        };

        let raw = self
            .generate(Some(&system), prompt, temperature, JSON_MAX_TOKENS)
            .await?;

        let cleaned = strip_code_fences(&raw);
        serde_json::from_str(cleaned).map_err(|source| LlmError::Json {
            context: format!("model output: {}", truncate(cleaned, 200)),
            source,
        })
    }
}

// Models frequently wrap JSON in markdown fences despite instructions;
// strip a leading "```json" or "```" and a trailing "```".
fn strip_code_fences(text: &str) -> &str {
    let mut out = text.trim();
    if let Some(rest) = out.strip_prefix("```json") {
        out = rest;
    } else if let Some(rest) = out.strip_prefix("```") {
        out = rest;
    }
    if let Some(rest) = out.strip_suffix("```") {
        out = rest;
    }
    out.trim()
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
