// src/infrastructure/gemini.rs
use crate::application::CoinAnalyzer;
use crate::constants::API_KEY_ENV_VAR;
use crate::domain::{CoinAnalysisResult, DomainError};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::time::Duration;
use tracing::{debug, instrument};

/// Base URL for the Gemini REST API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const MODEL: &str = "gemini-2.5-flash";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Instruction sent alongside the photo. Non-coin subjects are reported in
/// `description` rather than breaking the response schema.
const ANALYSIS_PROMPT: &str = "Analyze this image. If it is a coin, identify its title (denomination and name), country of origin, year of minting, estimated metallic composition (e.g., Copper, Silver, Zinc), and write a short, interesting historical or descriptive fact about it (max 2 sentences). Also provide a rough estimate of collector value range (e.g., '$1 - $5'). If it is not a coin, return a description stating that it doesn't look like a coin.";

/// Coin identification via the Gemini multimodal API.
///
/// Single attempt per call; no caching, no retry. The caller treats every
/// failure as recoverable and falls back to manual entry.
pub struct GeminiAnalyzer {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl GeminiAnalyzer {
    /// Build an analyzer from the `GEMINI_API_KEY` environment variable.
    pub fn new() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV_VAR).with_context(|| {
            format!("{API_KEY_ENV_VAR} is not set; coin analysis needs a Gemini API key")
        })?;
        Self::with_api_key(api_key)
    }

    pub fn with_api_key(api_key: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, api_key })
    }

    fn request_body(payload: &str) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": "image/jpeg", "data": payload } },
                    { "text": ANALYSIS_PROMPT },
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "description": "The denomination and name of the coin" },
                        "country": { "type": "STRING", "description": "Country of origin" },
                        "year": { "type": "STRING", "description": "Year of minting, or 'Unknown' if illegible" },
                        "description": { "type": "STRING", "description": "A short interesting fact or description" },
                        "composition": { "type": "STRING", "description": "Metallic composition" },
                        "estimatedValue": { "type": "STRING", "description": "Rough collector value range" }
                    },
                    "required": ["title", "country", "year", "description"]
                }
            }
        })
    }
}

impl CoinAnalyzer for GeminiAnalyzer {
    #[instrument(level = "debug", skip(self, image_data_uri))]
    fn analyze(&self, image_data_uri: &str) -> Result<CoinAnalysisResult, DomainError> {
        let payload = strip_data_uri_prefix(image_data_uri);
        let url = format!("{API_BASE_URL}/models/{MODEL}:generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(payload))
            .send()
            .map_err(|e| DomainError::Analysis(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DomainError::Analysis(format!(
                "service returned {status}: {body}"
            )));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .map_err(|e| DomainError::Analysis(format!("unreadable response: {e}")))?;

        let text = envelope
            .first_text()
            .ok_or_else(|| DomainError::Analysis("no response text from the model".to_string()))?;
        debug!(%text, "Model response");

        parse_analysis(&text)
    }
}

/// Drop the `data:...;base64,` prefix, leaving the raw base64 payload.
/// Input without a prefix passes through unchanged.
pub fn strip_data_uri_prefix(uri: &str) -> &str {
    uri.split_once(',').map_or(uri, |(_, payload)| payload)
}

/// Parse the model's JSON text into an analysis result.
///
/// A missing required field rejects the whole response; missing optional
/// fields become `None`.
pub fn parse_analysis(text: &str) -> Result<CoinAnalysisResult, DomainError> {
    serde_json::from_str(text)
        .map_err(|e| DomainError::Analysis(format!("response is not a valid coin description: {e}")))
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
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
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
    }
}
