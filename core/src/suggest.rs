// ABOUTME: AI name suggestion for new charging animations.
// ABOUTME: Wraps a remote text-generation call and always degrades to a fixed fallback name.

use std::future::Future;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::SuggestConfig;

/// Returned when no API key is configured.
pub const FALLBACK_UNCONFIGURED: &str = "Plasma Void";
/// Returned when the remote call fails or yields nothing.
pub const FALLBACK_FAILED: &str = "Quantum Flux";

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("no API key configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response contained no text")]
    EmptyResponse,
}

/// A source of new animation names.
pub trait NameGenerator {
    fn generate(
        &self,
        existing: &[String],
    ) -> impl Future<Output = Result<String, SuggestError>> + Send;
}

/// Asks `generator` for a new name. Never fails: errors are logged and mapped to a fallback.
pub async fn suggest<G: NameGenerator>(generator: &G, existing: &[String]) -> String {
    match generator.generate(existing).await {
        Ok(text) => {
            let name = text.trim();
            if name.is_empty() {
                error!(error = %SuggestError::EmptyResponse, "animation name suggestion failed");
                return FALLBACK_FAILED.to_string();
            }
            debug!(name, "animation name suggested");
            name.to_string()
        }
        Err(SuggestError::MissingCredential) => {
            warn!("suggestion API key is missing, using fallback name");
            FALLBACK_UNCONFIGURED.to_string()
        }
        Err(e) => {
            error!(error = %e, "animation name suggestion failed");
            FALLBACK_FAILED.to_string()
        }
    }
}

pub fn build_prompt(existing: &[String]) -> String {
    format!(
        "I have an Android charging animation app.\n\
         Current animation names are: {}.\n\
         Suggest ONE new, cool, futuristic, short name (max 3 words) for a charging animation style.\n\
         Do not use quotes. Just the name.",
        existing.join(", ")
    )
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Concatenated text of the first candidate, if any.
fn response_text(body: &str) -> Result<String, SuggestError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(SuggestError::EmptyResponse);
    }
    Ok(text)
}

/// Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &SuggestConfig, api_key: Option<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("failed to build HTTP client")?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        Ok(Self { http, url, api_key })
    }

    /// Reads the key from the environment variable named in `config`.
    pub fn from_config(config: &SuggestConfig) -> anyhow::Result<Self> {
        let api_key = config.api_key();
        if api_key.is_none() {
            warn!(
                variable = config.api_key_env.as_str(),
                "no suggestion API key in environment"
            );
        }
        Self::new(config, api_key)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl NameGenerator for GeminiClient {
    async fn generate(&self, existing: &[String]) -> Result<String, SuggestError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SuggestError::MissingCredential);
        };

        let prompt = build_prompt(existing);
        let request = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: &prompt }],
            }],
        };

        debug!(url = self.url.as_str(), "requesting animation name");
        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status));
        }

        let body = response.text().await?;
        response_text(&body)
    }
}
