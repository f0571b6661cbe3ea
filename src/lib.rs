//! promptgen: compose persona-driven prompts and send them to a generative text API.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{FilesystemOutputWriter, HttpGenerationClient, JsonPromptStore};
use app::AppContext;
use app::commands::{generate, history};
use ports::PromptRepository;

pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use domain::{AppError, Modes, StoredPromptRecord};

/// Output format for [`history`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFormat {
    Text,
    Json,
}

/// Generate content for a prompt using configuration from the environment
/// and the optional TOML file at `config_path`.
///
/// When `options.store` is set the prompt is persisted there; the store file is
/// created first if it does not exist.
pub fn generate(
    config_path: Option<&Path>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let config = domain::configuration::load_config(config_path)?;
    log::debug!("Loaded configuration: {:?}", config);

    let store = options.store.as_ref().map(JsonPromptStore::open).transpose()?;
    if let Some(store) = &store
        && store.was_created()
    {
        eprintln!("Database file created.");
    }

    let client = HttpGenerationClient::from_config(&config)?;
    let ctx = AppContext::new(client, FilesystemOutputWriter);

    generate::execute(&ctx, store.as_ref().map(|s| s as &dyn PromptRepository), options)
}

/// Render all prompts kept in the store at `store_path`.
pub fn history(store_path: &Path, format: HistoryFormat) -> Result<String, AppError> {
    if !store_path.exists() {
        return Err(AppError::Store(format!("No prompt store at {}", store_path.display())));
    }
    let store = JsonPromptStore::open(store_path)?;
    let records = history::execute(&store)?;

    match format {
        HistoryFormat::Text => Ok(history::render_text(&records)),
        HistoryFormat::Json => history::render_json(&records),
    }
}
