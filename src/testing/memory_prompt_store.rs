use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::domain::{AppError, NewPromptRecord, StoredPromptRecord};
use crate::ports::PromptRepository;

/// In-memory prompt store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryPromptStore {
    records: Arc<Mutex<Vec<StoredPromptRecord>>>,
}

impl MemoryPromptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PromptRepository for MemoryPromptStore {
    fn create(&self, record: NewPromptRecord) -> Result<StoredPromptRecord, AppError> {
        let mut records = self.records.lock().unwrap();
        let stored = StoredPromptRecord::from_new(records.len() as u64 + 1, record, Utc::now());
        records.push(stored.clone());
        Ok(stored)
    }

    fn list_all(&self) -> Result<Vec<StoredPromptRecord>, AppError> {
        Ok(self.records.lock().unwrap().clone())
    }
}
