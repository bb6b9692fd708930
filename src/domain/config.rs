//! Generation API configuration.

use url::Url;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the generation model id.
pub const MODEL_ENV: &str = "SARABUN_MODEL";

/// Environment variable switching in the mock generator (no API calls).
pub const MOCK_ENV: &str = "SARABUN_MOCK";

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini API settings for memo generation.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base URL (the `models/{model}:generateContent` path is appended).
    pub api_url: Url,
    /// Generation model id.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("Default API URL must be valid"),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    /// Default configuration with the model id taken from `SARABUN_MODEL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        match std::env::var(MODEL_ENV) {
            Ok(model) if !model.trim().is_empty() => config.model = model,
            _ => {}
        }
        config
    }
}
