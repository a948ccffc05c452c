//! LLM Client: the single point of entry for all Gemini API calls in the advisor.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! Handlers go through `advisor::Advisor`, which owns a `TextGenerator`.
//!
//! One request per call. Failures are returned to the caller, never retried.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content (finish reason: {finish_reason})")]
    EmptyContent { finish_reason: String },
}

/// Anything that can turn a prompt into generated text.
///
/// Carried in `Advisor` as `Arc<dyn TextGenerator>` so handlers never know
/// which backend answered.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, for logs and the health endpoint.
    fn model(&self) -> &str;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate. `None` only when there is
    /// no candidate, no content, or no text part at all (e.g. a safety block);
    /// an empty text part is a successful empty answer.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let parts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.concat())
    }

    fn finish_reason(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.clone())
            .unwrap_or_else(|| "no candidates".to_string())
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini client
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: String, config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(config.request_timeout).build()?,
            api_key,
            model: config.gemini_model.clone(),
            api_base: config.gemini_api_base.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let gemini_response: GenerateContentResponse = response.json().await?;

        let usage = gemini_response.usage_metadata.as_ref();
        debug!(
            "Gemini call succeeded: prompt_tokens={}, candidate_tokens={}",
            usage.map_or(0, |u| u.prompt_token_count),
            usage.map_or(0, |u| u.candidates_token_count)
        );

        Ok(gemini_response)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        response.text().ok_or_else(|| LlmError::EmptyContent {
            finish_reason: response.finish_reason(),
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
