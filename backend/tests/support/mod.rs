//! Shared helpers for tests that need a live PostgreSQL database.
//!
//! Set `TEST_DATABASE_URL` to a disposable database to run them. When it is
//! unset the tests log a skip notice and pass, so the default test run needs
//! no database.

use std::env;
use std::sync::OnceLock;

use backend::outbound::persistence::{DbPool, PoolConfig};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

static MIGRATED: OnceLock<Result<(), String>> = OnceLock::new();

/// The test database URL, or `None` after printing a skip notice.
pub fn test_database_url(test_name: &str) -> Option<String> {
    match env::var(DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {DATABASE_URL_ENV} unset; skipping {test_name}");
            None
        }
    }
}

fn run_migrations(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| err.to_string())?;
    conn.run_pending_migrations(MIGRATIONS)
        .map(drop)
        .map_err(|err| err.to_string())
}

/// Apply migrations once per test binary, then empty `table` and reset its
/// id sequence so the next insert gets id 1.
pub fn reset_table(url: &str, table: &str) {
    MIGRATED
        .get_or_init(|| run_migrations(url))
        .as_ref()
        .unwrap_or_else(|err| panic!("migrations failed: {err}"));

    let mut conn = PgConnection::establish(url).expect("connect to test database");
    diesel::sql_query(format!("TRUNCATE TABLE {table} RESTART IDENTITY"))
        .execute(&mut conn)
        .unwrap_or_else(|err| panic!("truncate {table}: {err}"));
}

/// A small pool against the test database.
pub async fn test_pool(url: &str) -> DbPool {
    DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("build test pool")
}
