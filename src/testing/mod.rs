mod fake_text_generator;
mod memory_prompt_store;
mod recording_output_writer;

pub use fake_text_generator::{FakeTextGenerator, GenerationCall};
pub use memory_prompt_store::MemoryPromptStore;
pub use recording_output_writer::RecordingOutputWriter;
