//! Persisted prompt records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::modes::Modes;

/// Prompt data handed to a store; the store assigns identity and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromptRecord {
    pub prompt: String,
    pub content: String,
    pub actor: String,
    pub modes: Modes,
}

/// A prompt as kept by a [`crate::ports::PromptRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPromptRecord {
    pub id: u64,
    pub prompt: String,
    pub content: String,
    pub actor: String,
    pub comments: bool,
    pub documentation: bool,
    pub explanations: bool,
    pub created_at: DateTime<Utc>,
}

impl StoredPromptRecord {
    pub fn from_new(id: u64, record: NewPromptRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            prompt: record.prompt,
            content: record.content,
            actor: record.actor,
            comments: record.modes.comments,
            documentation: record.modes.documentation,
            explanations: record.modes.explanations,
            created_at,
        }
    }

    pub fn modes(&self) -> Modes {
        Modes::new(self.comments, self.documentation, self.explanations)
    }
}
