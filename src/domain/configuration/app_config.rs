//! Application configuration domain models.

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;
use crate::domain::generation::SamplingParams;

/// Query delimiter the generation endpoint expects before the API key.
pub const KEY_QUERY_SUFFIX: &str = "?key=";

/// Resolved configuration for a single run.
#[derive(Clone, PartialEq)]
pub struct AppConfig {
    /// Generation API key, appended to the base URL.
    pub api_key: String,
    /// Generation endpoint, normalized to end with `?key=`.
    pub base_url: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    /// Number of results; sent as top-k.
    pub num_results: u32,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("max_tokens", &self.max_tokens)
            .field("num_results", &self.num_results)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::config_error("GEMINI_API_KEY must not be empty"));
        }
        Url::parse(&self.base_url).map_err(|e| {
            AppError::config_error(format!("GEMINI_BASE_URL is not a valid URL: {}", e))
        })?;
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(AppError::config_error("temperature must be a non-negative number"));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(AppError::config_error("top_p must be between 0 and 1"));
        }
        if self.max_tokens == 0 {
            return Err(AppError::config_error("max_tokens must be greater than 0"));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    pub fn sampling(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.temperature,
            top_p: self.top_p,
            max_output_tokens: self.max_tokens,
            top_k: self.num_results,
        }
    }
}

/// Append the key delimiter unless the URL already ends with it.
pub fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with(KEY_QUERY_SUFFIX) {
        base_url.to_string()
    } else {
        format!("{}{}", base_url, KEY_QUERY_SUFFIX)
    }
}

/// Optional settings read from a TOML file; environment values take precedence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_tokens: Option<u32>,
    pub num_results: Option<u32>,
    pub timeout_secs: Option<u64>,
}

pub(crate) fn default_temperature() -> f64 {
    1.0
}

pub(crate) fn default_top_p() -> f64 {
    0.8
}

pub(crate) fn default_max_tokens() -> u32 {
    4096
}

pub(crate) fn default_num_results() -> u32 {
    10
}
