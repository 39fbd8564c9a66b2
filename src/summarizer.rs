//! Summary generation via the OpenAI chat-completions API.
//!
//! When no API key is configured, or when the provider call fails for any
//! reason, the generator substitutes a fixed mock summary instead of
//! propagating the error. Callers always receive a summary string for a
//! non-empty transcript.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Returned when no OpenAI API key is configured.
pub const MOCK_SUMMARY_NO_KEY: &str =
    "This is a mock summary because OpenAI API key is not provided.";

/// Returned when the OpenAI request fails for any reason.
pub const MOCK_SUMMARY_REQUEST_FAILED: &str =
    "This is a mock summary because OpenAI request failed.";

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 500;

#[derive(Clone)]
pub struct Summarizer {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

// ============================================================================
// OpenAI wire types
// ============================================================================

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

// ============================================================================
// Summarizer
// ============================================================================

impl Summarizer {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, OPENAI_BASE_URL)
    }

    /// Construct against a non-default API endpoint (used by tests).
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: base_url.into(),
        }
    }

    /// Generate a summary for a transcript.
    ///
    /// Fails only on an empty transcript. Provider failures are logged and
    /// converted to [`MOCK_SUMMARY_REQUEST_FAILED`]; a missing API key yields
    /// [`MOCK_SUMMARY_NO_KEY`].
    pub async fn generate(&self, transcript: &str, instruction: &str) -> Result<String> {
        if transcript.is_empty() {
            bail!("Transcript required");
        }

        let prompt = build_prompt(transcript, instruction);

        let api_key = match &self.api_key {
            Some(key) => key,
            None => return Ok(MOCK_SUMMARY_NO_KEY.to_string()),
        };

        match self.complete(api_key, &prompt).await {
            Ok(text) => Ok(text),
            Err(e) => {
                error!("OpenAI error: {:#}", e);
                Ok(MOCK_SUMMARY_REQUEST_FAILED.to_string())
            }
        }
    }

    /// One chat-completions round trip. No retries, no streaming.
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: ChatResponse = response.json().await?;
        let choice = body
            .choices
            .into_iter()
            .next()
            .context("OpenAI response contained no choices")?;

        Ok(choice.message.content.trim().to_string())
    }
}

/// Build the natural-language prompt sent to the model.
pub fn build_prompt(transcript: &str, instruction: &str) -> String {
    if instruction.is_empty() {
        format!("Summarize the following transcript:\n{}", transcript)
    } else {
        format!(
            "Summarize the following transcript according to the instruction: {}\n\nTranscript:\n{}",
            instruction, transcript
        )
    }
}
