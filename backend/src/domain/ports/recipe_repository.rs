//! Port abstraction for recipe persistence.
use async_trait::async_trait;

use crate::domain::{Recipe, RecipeChanges, RecipeDraft, RecordId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by recipe repository adapters.
    pub enum RecipePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "recipe repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "recipe repository query failed: {message}",
        /// No recipe carries the requested identifier.
        NotFound { id: i32 } => "recipe {id} not found",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Every stored recipe, ordered by identifier.
    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError>;

    /// Persist a new recipe.
    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, RecipePersistenceError>;

    /// Overwrite the submitted fields of an existing recipe.
    async fn update(
        &self,
        id: RecordId,
        changes: RecipeChanges,
    ) -> Result<Recipe, RecipePersistenceError>;
}
