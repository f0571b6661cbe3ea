//! Instruction toggles appended to a prompt.

/// Independent style modifiers requested for a single generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modes {
    /// Ask for detailed in-code comments.
    pub comments: bool,
    /// Ask for documentation of the generated code and its dependencies.
    pub documentation: bool,
    /// Ask for an explanation of what the code does and how to use it.
    pub explanations: bool,
}

impl Modes {
    pub fn new(comments: bool, documentation: bool, explanations: bool) -> Self {
        Self { comments, documentation, explanations }
    }
}
