//! Prompt composition: persona, task, attached content and mode instructions.

use super::modes::Modes;

pub const COMMENTS_INSTRUCTION: &str = "Include detailed in-code comments whenever applicable.";

pub const DOCUMENTATION_INSTRUCTION: &str = "Attach extensive documentation for generated code as well as for used dependencies or modules. Include it below code and DO comment these lines out.";

pub const EXPLANATIONS_INSTRUCTION: &str = "Add detailed explanation on how to use code and what it does. Include them below code and DO comment these lines out.";

/// Fully assembled instruction text for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    actor: String,
    text: String,
}

impl ComposedPrompt {
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Task and instructions, without the persona prefix.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text as sent on the wire: `As a <actor>, <text>`.
    pub fn with_persona(&self) -> String {
        format!("As a {}, {}", self.actor, self.text)
    }
}

/// Compose the prompt for `actor` from `task` and the requested `modes`.
///
/// Each enabled instruction is prepended above the previous one, so the
/// resulting order is explanations, documentation, comments.
pub fn compose(actor: &str, task: &str, modes: Modes) -> ComposedPrompt {
    let mut instructions = String::new();
    if modes.comments {
        instructions = format!("{}\n{}", COMMENTS_INSTRUCTION, instructions);
    }
    if modes.documentation {
        instructions = format!("{}\n{}", DOCUMENTATION_INSTRUCTION, instructions);
    }
    if modes.explanations {
        instructions = format!("{}\n{}", EXPLANATIONS_INSTRUCTION, instructions);
    }

    ComposedPrompt { actor: actor.to_string(), text: format!("{}.\n\n{}", task, instructions) }
}

/// Attach file content to the task text. Empty content leaves the task as is.
pub fn attach_content(task: &str, content: &str) -> String {
    if content.is_empty() {
        return task.to_string();
    }
    format!("{}.\nContent: \n\n{}", task, content)
}
