//! Google Gemini generation service adapter
//!
//! Implements the GenerationPort against the generateContent API.

use crate::config::GenerationServiceConfig;
use crate::domain::models::GenerationRequest;
use crate::error::{AppError, Result};
use crate::ports::generation::GenerationPort;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Nucleus sampling parameters sent with every request
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 10;

/// Gemini generation service implementation
pub struct GeminiService {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
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
    text: Option<String>,
}

impl GeminiService {
    /// Create a new Gemini service from explicit configuration
    pub fn new(config: &GenerationServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

/// Pull the single-candidate text out of a decoded response envelope.
fn extract_candidate_text(envelope: GenerateContentResponse) -> Result<String> {
    envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or(AppError::MalformedUpstreamEnvelope)
}

#[async_trait]
impl GenerationPort for GeminiService {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
                top_p: TOP_P,
                top_k: TOP_K,
            },
        };

        log::info!(
            "Calling Gemini generateContent with model: {}, prompt length: {}",
            self.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable {
                status: None,
                body: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Gemini API error {}: {}", status, error_text);
            return Err(AppError::UpstreamUnavailable {
                status: Some(status.as_u16()),
                body: error_text,
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|_| AppError::MalformedUpstreamEnvelope)?;

        let text = extract_candidate_text(envelope)?;
        log::info!(
            "Gemini completion successful, generated {} characters",
            text.len()
        );

        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
