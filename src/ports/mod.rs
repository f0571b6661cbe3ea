mod output_writer;
mod prompt_repository;
mod text_generator;

pub use output_writer::OutputWriter;
pub use prompt_repository::PromptRepository;
pub use text_generator::TextGenerator;
