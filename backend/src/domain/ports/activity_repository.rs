//! Port abstraction for activity persistence.
use async_trait::async_trait;

use crate::domain::{Activity, ActivityFields, RecordId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by activity repository adapters.
    pub enum ActivityPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "activity repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "activity repository query failed: {message}",
        /// No activity carries the requested identifier.
        NotFound { id: i32 } => "activity {id} not found",
    }
}

/// Storage for free-form activity documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Every stored activity, ordered by identifier.
    async fn list(&self) -> Result<Vec<Activity>, ActivityPersistenceError>;

    /// Persist a new document and return it with its assigned identifier.
    async fn create(&self, fields: ActivityFields) -> Result<Activity, ActivityPersistenceError>;

    /// Merge `patch` into the stored document's top-level keys.
    async fn update(
        &self,
        id: RecordId,
        patch: ActivityFields,
    ) -> Result<Activity, ActivityPersistenceError>;

    /// Remove an activity.
    async fn delete(&self, id: RecordId) -> Result<(), ActivityPersistenceError>;
}
