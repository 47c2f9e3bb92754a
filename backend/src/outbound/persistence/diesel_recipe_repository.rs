//! PostgreSQL-backed `RecipeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecipePersistenceError, RecipeRepository};
use crate::domain::{Recipe, RecipeChanges, RecipeDraft, RecordId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewRecipeRow, RecipeRow, RecipeUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::recipes;

/// Diesel-backed implementation of the `RecipeRepository` port.
#[derive(Clone)]
pub struct DieselRecipeRepository {
    pool: DbPool,
}

impl DieselRecipeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> RecipePersistenceError {
    map_pool_error(error, RecipePersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> RecipePersistenceError {
    map_diesel_error(
        error,
        RecipePersistenceError::query,
        RecipePersistenceError::connection,
    )
}

#[async_trait]
impl RecipeRepository for DieselRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<RecipeRow> = recipes::table
            .order(recipes::id.asc())
            .select(RecipeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: RecipeRow = diesel::insert_into(recipes::table)
            .values(NewRecipeRow::from(&draft))
            .returning(RecipeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: RecordId,
        changes: RecipeChanges,
    ) -> Result<Recipe, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        // Diesel refuses an UPDATE with an empty SET list.
        let row: Option<RecipeRow> = if changes.is_empty() {
            recipes::table
                .find(id.get())
                .select(RecipeRow::as_select())
                .first(&mut conn)
                .await
                .optional()
        } else {
            diesel::update(recipes::table.find(id.get()))
                .set(RecipeUpdate::from(&changes))
                .returning(RecipeRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
        }
        .map_err(diesel_error)?;

        row.map(Recipe::from)
            .ok_or_else(|| RecipePersistenceError::not_found(id.get()))
    }
}
