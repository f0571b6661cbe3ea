//! Text generation port definition.

use crate::domain::{AppError, Modes};

/// Port for one-shot text generation.
pub trait TextGenerator {
    /// Compose a prompt for `actor` from `prompt` and `modes`, send it, and return the generated text.
    fn generate_content(&self, actor: &str, prompt: &str, modes: Modes)
    -> Result<String, AppError>;
}
