//! File-backed prompt store keeping all records in one JSON document.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::{AppError, NewPromptRecord, StoredPromptRecord};
use crate::ports::PromptRepository;

/// Prompt store backed by a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonPromptStore {
    path: PathBuf,
    created: bool,
}

impl JsonPromptStore {
    /// Open the store at `path`, creating an empty store file if none exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let created = !path.exists();
        if created {
            write_atomic(&path, b"[]\n")?;
        }
        Ok(Self { path, created })
    }

    /// Whether [`JsonPromptStore::open`] had to create the file.
    pub fn was_created(&self) -> bool {
        self.created
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<StoredPromptRecord>, AppError> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            AppError::Store(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, records: &[StoredPromptRecord]) -> Result<(), AppError> {
        let mut content = serde_json::to_vec_pretty(records)
            .map_err(|e| AppError::Store(format!("Failed to encode records: {}", e)))?;
        content.push(b'\n');
        write_atomic(&self.path, &content)
    }
}

impl PromptRepository for JsonPromptStore {
    fn create(&self, record: NewPromptRecord) -> Result<StoredPromptRecord, AppError> {
        let mut records = self.load()?;
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let stored = StoredPromptRecord::from_new(id, record, Utc::now());

        records.push(stored.clone());
        self.save(&records)?;
        Ok(stored)
    }

    fn list_all(&self) -> Result<Vec<StoredPromptRecord>, AppError> {
        self.load()
    }
}

/// Write to a sibling temp file, sync, then rename over the target.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), AppError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Store(format!("Invalid store path: {}", path.display())))?;
    let temp_path = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    let mut file = File::create(&temp_path)?;
    file.write_all(content)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })?;
    Ok(())
}
