//! History command: list persisted prompts.

use crate::domain::{AppError, StoredPromptRecord};
use crate::ports::PromptRepository;

const PREVIEW_CHARS: usize = 72;

pub fn execute(store: &impl PromptRepository) -> Result<Vec<StoredPromptRecord>, AppError> {
    store.list_all()
}

/// Human-readable listing, one header line and one preview line per record.
pub fn render_text(records: &[StoredPromptRecord]) -> String {
    if records.is_empty() {
        return "No prompts stored.".to_string();
    }

    records
        .iter()
        .map(|record| {
            format!(
                "#{} {} [{}] as {}\n    {}",
                record.id,
                record.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                mode_labels(record),
                record.actor,
                preview(&record.prompt)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(records: &[StoredPromptRecord]) -> Result<String, AppError> {
    serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Serialization(format!("Failed to encode history: {}", e)))
}

fn mode_labels(record: &StoredPromptRecord) -> String {
    let labels: Vec<&str> = [
        (record.explanations, "explanations"),
        (record.documentation, "documentation"),
        (record.comments, "comments"),
    ]
    .into_iter()
    .filter_map(|(enabled, label)| enabled.then_some(label))
    .collect();

    if labels.is_empty() { "plain".to_string() } else { labels.join(",") }
}

fn preview(prompt: &str) -> String {
    let first_line = prompt.lines().next().unwrap_or_default();
    if first_line.chars().count() > PREVIEW_CHARS {
        let truncated: String = first_line.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", truncated)
    } else {
        first_line.to_string()
    }
}
