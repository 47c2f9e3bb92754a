//! Port abstraction for pantry persistence.
use async_trait::async_trait;

use crate::domain::{PantryItem, PantryItemChanges, PantryItemDraft, RecordId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by pantry repository adapters.
    pub enum PantryPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "pantry repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "pantry repository query failed: {message}",
        /// No pantry item carries the requested identifier.
        NotFound { id: i32 } => "pantry item {id} not found",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PantryRepository: Send + Sync {
    /// Every stored pantry item, ordered by identifier.
    async fn list(&self) -> Result<Vec<PantryItem>, PantryPersistenceError>;

    /// Persist a new pantry item.
    async fn create(&self, draft: PantryItemDraft) -> Result<PantryItem, PantryPersistenceError>;

    /// Overwrite the submitted fields of an existing item.
    async fn update(
        &self,
        id: RecordId,
        changes: PantryItemChanges,
    ) -> Result<PantryItem, PantryPersistenceError>;

    /// Remove a pantry item.
    async fn delete(&self, id: RecordId) -> Result<(), PantryPersistenceError>;
}
