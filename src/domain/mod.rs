pub mod cleanup;
pub mod composer;
pub mod configuration;
pub mod error;
pub mod generation;
pub mod modes;
pub mod record;

pub use cleanup::clean_result_text;
pub use composer::{ComposedPrompt, attach_content, compose};
pub use configuration::{AppConfig, FileConfig};
pub use error::AppError;
pub use generation::{GenerationRequest, GenerationResponse, SamplingParams, strip_first_line};
pub use modes::Modes;
pub use record::{NewPromptRecord, StoredPromptRecord};
