//! PostgreSQL-backed `ActivityRepository` storing each activity as a JSONB
//! document.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ActivityPersistenceError, ActivityRepository};
use crate::domain::{Activity, ActivityFields, RecordId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ActivityRow, NewActivityRow};
use super::pool::{DbPool, PoolError};
use super::schema::activities;

/// Diesel-backed implementation of the `ActivityRepository` port.
#[derive(Clone)]
pub struct DieselActivityRepository {
    pool: DbPool,
}

impl DieselActivityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ActivityPersistenceError {
    map_pool_error(error, ActivityPersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ActivityPersistenceError {
    map_diesel_error(
        error,
        ActivityPersistenceError::query,
        ActivityPersistenceError::connection,
    )
}

fn to_domain(row: ActivityRow) -> Result<Activity, ActivityPersistenceError> {
    row.into_activity().map_err(ActivityPersistenceError::query)
}

#[async_trait]
impl ActivityRepository for DieselActivityRepository {
    async fn list(&self) -> Result<Vec<Activity>, ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<ActivityRow> = activities::table
            .order(activities::id.asc())
            .select(ActivityRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter().map(to_domain).collect()
    }

    async fn create(&self, fields: ActivityFields) -> Result<Activity, ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: ActivityRow = diesel::insert_into(activities::table)
            .values(NewActivityRow {
                data: fields.into_value(),
            })
            .returning(ActivityRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;

        to_domain(row)
    }

    async fn update(
        &self,
        id: RecordId,
        patch: ActivityFields,
    ) -> Result<Activity, ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        // `||` on two JSONB objects keeps the right-hand value for shared keys.
        let row: Option<ActivityRow> = diesel::update(activities::table.find(id.get()))
            .set(activities::data.eq(activities::data.concat(patch.into_value())))
            .returning(ActivityRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map_or_else(
            || Err(ActivityPersistenceError::not_found(id.get())),
            to_domain,
        )
    }

    async fn delete(&self, id: RecordId) -> Result<(), ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let removed = diesel::delete(activities::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;

        if removed == 0 {
            return Err(ActivityPersistenceError::not_found(id.get()));
        }
        Ok(())
    }
}
