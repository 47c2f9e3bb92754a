//! PostgreSQL-backed `PantryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PantryPersistenceError, PantryRepository};
use crate::domain::{PantryItem, PantryItemChanges, PantryItemDraft, RecordId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPantryItemRow, PantryItemRow, PantryItemUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::pantry_items;

/// Diesel-backed implementation of the `PantryRepository` port.
#[derive(Clone)]
pub struct DieselPantryRepository {
    pool: DbPool,
}

impl DieselPantryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> PantryPersistenceError {
    map_pool_error(error, PantryPersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> PantryPersistenceError {
    map_diesel_error(
        error,
        PantryPersistenceError::query,
        PantryPersistenceError::connection,
    )
}

#[async_trait]
impl PantryRepository for DieselPantryRepository {
    async fn list(&self) -> Result<Vec<PantryItem>, PantryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<PantryItemRow> = pantry_items::table
            .order(pantry_items::id.asc())
            .select(PantryItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(rows.into_iter().map(PantryItem::from).collect())
    }

    async fn create(&self, draft: PantryItemDraft) -> Result<PantryItem, PantryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: PantryItemRow = diesel::insert_into(pantry_items::table)
            .values(NewPantryItemRow::from(&draft))
            .returning(PantryItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: RecordId,
        changes: PantryItemChanges,
    ) -> Result<PantryItem, PantryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        // Diesel refuses an UPDATE with an empty SET list.
        let row: Option<PantryItemRow> = if changes.is_empty() {
            pantry_items::table
                .find(id.get())
                .select(PantryItemRow::as_select())
                .first(&mut conn)
                .await
                .optional()
        } else {
            diesel::update(pantry_items::table.find(id.get()))
                .set(PantryItemUpdate::from(&changes))
                .returning(PantryItemRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
        }
        .map_err(diesel_error)?;

        row.map(PantryItem::from)
            .ok_or_else(|| PantryPersistenceError::not_found(id.get()))
    }

    async fn delete(&self, id: RecordId) -> Result<(), PantryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let removed = diesel::delete(pantry_items::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;

        if removed == 0 {
            return Err(PantryPersistenceError::not_found(id.get()));
        }
        Ok(())
    }
}
