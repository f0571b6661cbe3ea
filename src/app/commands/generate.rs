//! Generate command: compose, call the generation API, persist and emit the result.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{
    AppError, Modes, NewPromptRecord, StoredPromptRecord, attach_content, clean_result_text,
};
use crate::ports::{OutputWriter, PromptRepository, TextGenerator};

/// Options for a single generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Persona the model should adopt.
    pub actor: String,
    /// Task description.
    pub prompt: String,
    /// File whose content is attached to the task.
    pub input: Option<PathBuf>,
    /// File receiving the cleaned result instead of stdout.
    pub output: Option<PathBuf>,
    /// Prompt store path; records are persisted only when set.
    pub store: Option<PathBuf>,
    pub modes: Modes,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Cleaned generated text.
    pub text: String,
    /// Record persisted for this run, if a store was given.
    pub record: Option<StoredPromptRecord>,
    /// File the text was written to, if any.
    pub written_to: Option<PathBuf>,
}

pub fn execute<G, W>(
    ctx: &AppContext<G, W>,
    store: Option<&dyn PromptRepository>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    G: TextGenerator,
    W: OutputWriter,
{
    if options.actor.is_empty() || options.prompt.is_empty() {
        return Err(AppError::config_error("Both --actor and --prompt parameters are required."));
    }

    let content = match &options.input {
        Some(path) => read_input(path)?,
        None => String::new(),
    };
    let prompt = attach_content(&options.prompt, &content);

    log::debug!("Requesting generation as '{}' with {:?}", options.actor, options.modes);
    let generated = ctx.generator().generate_content(&options.actor, &prompt, options.modes)?;

    let record = match store {
        Some(store) => {
            let stored = store.create(NewPromptRecord {
                prompt,
                content,
                actor: options.actor.clone(),
                modes: options.modes,
            })?;
            log::info!("Stored prompt #{}", stored.id);
            Some(stored)
        }
        None => None,
    };

    let text = clean_result_text(&generated);

    if let Some(path) = &options.output {
        ctx.writer().write(path, &text)?;
        log::info!("Wrote result to {}", path.display());
    }

    Ok(GenerateOutcome { text, record, written_to: options.output.clone() })
}

/// Read the attached file; invalid UTF-8 is replaced rather than rejected.
fn read_input(path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(path).map_err(|e| {
        AppError::Io(io::Error::new(
            e.kind(),
            format!("Error reading input file {}: {}", path.display(), e),
        ))
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
