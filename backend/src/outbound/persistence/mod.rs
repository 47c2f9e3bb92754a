//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Each repository implements one domain port over a shared [`DbPool`]
//! (`diesel-async` connections pooled by `bb8`). Row structs (`models`) and
//! table definitions (`schema`) stay private to this module; store failures
//! are mapped into the port's error enum with their original message.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselRecipeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/pantry")).await?;
//! let recipes = DieselRecipeRepository::new(pool);
//! ```

mod diesel_activity_repository;
mod diesel_pantry_repository;
mod diesel_recipe_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_activity_repository::DieselActivityRepository;
pub use diesel_pantry_repository::DieselPantryRepository;
pub use diesel_recipe_repository::DieselRecipeRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
