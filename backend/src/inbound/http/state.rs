//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! request-level tests can substitute in-memory or mocked implementations.

use std::sync::Arc;

use crate::domain::ports::{AccountService, ActivityRepository, PantryRepository, RecipeRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub activities: Arc<dyn ActivityRepository>,
    pub accounts: Arc<dyn AccountService>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub pantry: Arc<dyn PantryRepository>,
}

impl HttpState {
    pub fn new(
        activities: Arc<dyn ActivityRepository>,
        accounts: Arc<dyn AccountService>,
        recipes: Arc<dyn RecipeRepository>,
        pantry: Arc<dyn PantryRepository>,
    ) -> Self {
        Self {
            activities,
            accounts,
            recipes,
            pantry,
        }
    }
}
