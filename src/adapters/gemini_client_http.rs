//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::domain::{API_KEY_ENV, AppError, GeminiConfig};
use crate::ports::MemoGenerator;

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// HTTP transport for the Gemini `generateContent` endpoint.
///
/// Performs a single non-streaming request per call. No retry, no rate
/// limiting; the draft flow degrades to a fixed fallback message instead.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: String,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::GeminiApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.api_url.as_str().trim_end_matches('/'),
            config.model
        );

        Ok(Self { api_key, endpoint, client })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(config: &GeminiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AppError::EnvVarMissing(API_KEY_ENV.to_string()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest) -> Result<String, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .map_err(|e| AppError::GeminiApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::GeminiApi {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            return Ok(api_response.into_text());
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::GeminiApi { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    contents: Vec<Content>,
}

impl ApiRequest {
    fn single_turn(prompt: &str) -> Self {
        Self { contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }] }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl ApiResponse {
    /// First candidate's text, parts concatenated. Empty when the model
    /// returned no candidates; the caller substitutes the fallback message.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content.parts.into_iter().map(|part| part.text).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default()
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl MemoGenerator for HttpGeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.send_request(&ApiRequest::single_turn(prompt))
    }
}
