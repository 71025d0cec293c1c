//! Chat-completion client for the GitHub Models endpoint.
//!
//! A thin wrapper over the OpenAI-compatible `chat/completions` API exposed
//! at `models.inference.ai.azure.com`, authenticated with a GitHub personal
//! access token. [`ChatClient::generate_json`] adds the strict-JSON system
//! instruction and markdown-fence cleanup the idea generator relies on.

pub mod client;
pub mod error;

pub use client::ChatClient;
pub use error::LlmError;
