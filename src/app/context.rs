use crate::ports::{OutputWriter, TextGenerator};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: TextGenerator, W: OutputWriter> {
    generator: G,
    writer: W,
}

impl<G: TextGenerator, W: OutputWriter> AppContext<G, W> {
    /// Create a new application context.
    pub fn new(generator: G, writer: W) -> Self {
        Self { generator, writer }
    }

    /// Get a reference to the text generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a reference to the output writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }
}
