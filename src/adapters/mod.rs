pub mod generation_client_http;
pub mod json_prompt_store;
pub mod output_filesystem;

pub use generation_client_http::HttpGenerationClient;
pub use json_prompt_store::JsonPromptStore;
pub use output_filesystem::FilesystemOutputWriter;
