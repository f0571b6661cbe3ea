use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Modes};
use crate::ports::TextGenerator;

/// Arguments of one `generate_content` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationCall {
    pub actor: String,
    pub prompt: String,
    pub modes: Modes,
}

/// Generator returning a canned response and recording every call.
#[derive(Clone)]
pub struct FakeTextGenerator {
    pub calls: Arc<Mutex<Vec<GenerationCall>>>,
    response: Option<String>,
}

impl FakeTextGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), response: Some(response.into()) }
    }

    /// Generator whose every call fails with an empty response.
    pub fn failing() -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), response: None }
    }

    pub fn get_calls(&self) -> Vec<GenerationCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextGenerator for FakeTextGenerator {
    fn generate_content(
        &self,
        actor: &str,
        prompt: &str,
        modes: Modes,
    ) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(GenerationCall {
            actor: actor.to_string(),
            prompt: prompt.to_string(),
            modes,
        });
        self.response.clone().ok_or(AppError::EmptyResponse)
    }
}
