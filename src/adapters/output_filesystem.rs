use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::OutputWriter;

/// Writes generated output to files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemOutputWriter;

impl OutputWriter for FilesystemOutputWriter {
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        Ok(())
    }
}
