use crate::domain::{AppError, NewPromptRecord, StoredPromptRecord};

/// Port for persisting prompt records.
pub trait PromptRepository {
    /// Store a new record and return it with its assigned identity.
    fn create(&self, record: NewPromptRecord) -> Result<StoredPromptRecord, AppError>;

    /// All stored records in insertion order.
    fn list_all(&self) -> Result<Vec<StoredPromptRecord>, AppError>;
}
