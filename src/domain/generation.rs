//! Wire contracts for the text generation endpoint.

use serde::{Deserialize, Serialize};

use super::composer::ComposedPrompt;
use super::error::AppError;

/// Sampling parameters fixed for the lifetime of a client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
    pub top_k: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub stop_sequences: Vec<String>,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default = "empty_content")]
    pub content: Content,
}

fn empty_content() -> Content {
    Content { parts: Vec::new() }
}

impl GenerationRequest {
    /// Build the single-content request for `prompt` using `sampling`.
    pub fn new(prompt: &ComposedPrompt, sampling: &SamplingParams) -> Self {
        Self {
            contents: vec![Content { parts: vec![Part { text: prompt.with_persona() }] }],
            generation_config: GenerationConfig {
                stop_sequences: Vec::new(),
                temperature: sampling.temperature,
                max_output_tokens: sampling.max_output_tokens,
                top_p: sampling.top_p,
                top_k: sampling.top_k,
            },
        }
    }
}

impl GenerationResponse {
    /// Decode a raw response body.
    pub fn parse(body: &str) -> Result<Self, AppError> {
        serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))
    }

    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Result<&str, AppError> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or(AppError::EmptyResponse)
    }
}

/// Drop the first line of generated text, which the model uses for a fence or language tag.
///
/// Text with a single line (or none) yields an empty string.
pub fn strip_first_line(text: &str) -> String {
    match text.split_once('\n') {
        Some((_, rest)) => rest.to_string(),
        None => String::new(),
    }
}
