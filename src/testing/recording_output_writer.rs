use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::OutputWriter;

/// Output writer that keeps written files in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutputWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl RecordingOutputWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_written(&self) -> Vec<(PathBuf, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl OutputWriter for RecordingOutputWriter {
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.written.lock().unwrap().push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
