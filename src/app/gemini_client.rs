//! Client for Google's Gemini `generateContent` REST API.
//!
//! One generation is exactly one HTTP request: no streaming, no retries, no
//! queueing. The credential comes from the `GEMINI_API_KEY` environment
//! variable; construction fails without it, and that failure is surfaced the
//! first time the user asks for a generation rather than at startup.
//!
//! The response text is returned exactly as the service produced it. Cleanup
//! of code fences happens in the UI layer, which owns presentation.

use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding [`DEFAULT_MODEL`].
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Failure modes of a generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The client could not be constructed, usually because the credential is
    /// missing. Fatal for the session: no request is ever sent in this state.
    Configuration(String),

    /// Transport or service failure during the single request. The user may
    /// trigger another attempt; nothing retries automatically.
    Request(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Configuration(msg) => {
                write!(f, "Gemini client is not configured: {}", msg)
            }
            GenerationError::Request(msg) => write!(f, "Code generation failed: {}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}

// Wire format of models/<model>:generateContent.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Blocking Gemini client. Cheap to clone; clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl GeminiClient {
    /// Builds a client from `GEMINI_API_KEY` (and optionally `GEMINI_MODEL`).
    ///
    /// A missing or blank key is a [`GenerationError::Configuration`]; no
    /// network access happens here or later while in that state.
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GenerationError::Configuration(format!(
                    "{} environment variable not found",
                    API_KEY_ENV
                ))
            })?;

        let model = std::env::var(MODEL_ENV)
            .ok()
            .map(|model| model.trim().to_string())
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self::new(api_key, model)
    }

    /// Builds a client with an explicit key and model.
    pub fn new(api_key: String, model: String) -> Result<Self, GenerationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| {
                GenerationError::Configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key,
            model,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the prompt and returns the raw response text.
    ///
    /// Blocks until the service answers or the transport gives up; callers
    /// that must stay responsive use [`GeminiClient::generate_async`].
    pub fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/models/{}:generateContent", GEMINI_API_BASE, self.model);
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        log_debug!(
            "Requesting generation from {} ({} prompt bytes)",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| GenerationError::Request(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Request(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| GenerationError::Request(format!("could not parse response: {}", e)))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                GenerationError::Request("response contained no generated text".to_string())
            })
    }

    /// Runs [`GeminiClient::generate`] on a background thread and delivers the
    /// single result over the returned channel. The UI polls the receiver with
    /// `try_recv` each frame, so nothing blocks the event loop.
    pub fn generate_async(self, prompt: String) -> mpsc::Receiver<Result<String, GenerationError>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            log_info!("Generation request started (model {})", self.model);
            let result = self.generate(&prompt);
            match &result {
                Ok(code) => log_info!("Generation finished ({} bytes)", code.len()),
                Err(e) => log_error!("Generation failed: {}", e),
            }
            tx.send(result).unwrap_or_default();
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_body_matches_the_generate_content_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: "build a server".to_string(),
                }],
            }],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "build a server" }] }]
            })
        );
    }

    #[test]
    fn response_body_parses_the_first_candidate_text() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{ "text": "const express = require('express');" }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "modelVersion": "gemini-2.5-flash"
        }"#;

        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        let text = parsed.candidates[0].content.as_ref().unwrap().parts[0]
            .text
            .clone();
        assert_eq!(text, "const express = require('express');");
    }

    #[test]
    fn response_body_tolerates_missing_candidates() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn response_body_tolerates_empty_parts() {
        let json = r#"{ "candidates": [{ "content": { "parts": [] } }] }"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .is_empty());
    }
}
