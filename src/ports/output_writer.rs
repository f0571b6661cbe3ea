use std::path::Path;

use crate::domain::AppError;

/// Port for writing generated output.
pub trait OutputWriter {
    /// Write `content` to `path`, replacing any existing file.
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
