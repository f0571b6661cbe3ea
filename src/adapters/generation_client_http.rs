//! Generation API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::{
    AppConfig, AppError, GenerationRequest, GenerationResponse, Modes, SamplingParams, compose,
    strip_first_line,
};
use crate::ports::TextGenerator;

/// HTTP client for the text generation endpoint.
#[derive(Clone)]
pub struct HttpGenerationClient {
    url: Url,
    sampling: SamplingParams,
    client: Client,
}

impl std::fmt::Debug for HttpGenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGenerationClient")
            .field("host", &self.url.host_str())
            .field("path", &self.url.path())
            .field("sampling", &self.sampling)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGenerationClient {
    /// Create a client posting to `base_url` followed verbatim by `api_key`.
    ///
    /// `base_url` must already end with the key query delimiter. With no
    /// `timeout` the request waits indefinitely.
    pub fn new(
        base_url: &str,
        api_key: &str,
        sampling: SamplingParams,
        timeout: Option<Duration>,
    ) -> Result<Self, AppError> {
        let url = Url::parse(&format!("{}{}", base_url, api_key))
            .map_err(|e| AppError::Configuration(format!("Invalid generation endpoint: {}", e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { url, sampling, client })
    }

    /// Create from resolved application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Self::new(
            &config.base_url,
            &config.api_key,
            config.sampling(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn sampling(&self) -> &SamplingParams {
        &self.sampling
    }

    fn send_request(&self, request: &GenerationRequest) -> Result<GenerationResponse, AppError> {
        let body =
            serde_json::to_vec(request).map_err(|e| AppError::Serialization(e.to_string()))?;

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| AppError::Transport(e.without_url().to_string()))?;

        let text = response.text().map_err(|e| AppError::Transport(e.without_url().to_string()))?;
        GenerationResponse::parse(&text)
    }
}

impl TextGenerator for HttpGenerationClient {
    fn generate_content(
        &self,
        actor: &str,
        prompt: &str,
        modes: Modes,
    ) -> Result<String, AppError> {
        let composed = compose(actor, prompt, modes);
        let request = GenerationRequest::new(&composed, &self.sampling);

        let response = self.send_request(&request)?;
        Ok(strip_first_line(response.first_text()?))
    }
}
