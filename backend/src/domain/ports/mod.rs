//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod activity_repository;
mod pantry_repository;
mod recipe_repository;
mod user_repository;

pub use account_service::AccountService;
#[cfg(test)]
pub use account_service::MockAccountService;
#[cfg(test)]
pub use activity_repository::MockActivityRepository;
pub use activity_repository::{ActivityPersistenceError, ActivityRepository};
#[cfg(test)]
pub use pantry_repository::MockPantryRepository;
pub use pantry_repository::{PantryPersistenceError, PantryRepository};
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipePersistenceError, RecipeRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
