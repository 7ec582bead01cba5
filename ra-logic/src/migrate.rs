use ra_data_sqlx::{SqlxErrorExt, SqlxResult};
use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

/// Schema migrations embedded at compile time from `migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Bring the schema of `pool` up to date.
pub async fn migrate(pool: &SqlitePool) -> SqlxResult<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| e.into_data_error())?;
    tracing::info!(migrations = MIGRATOR.iter().count(), "schema migrated");
    Ok(())
}
