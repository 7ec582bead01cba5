use crate::error::{SqlxErrorExt, SqlxResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Open a SQLite pool.
///
/// An in-memory database lives and dies with its connection, so `:memory:`
/// URLs get exactly one connection that is never recycled.
pub async fn connect(url: &str, max_connections: u32) -> SqlxResult<SqlitePool> {
    let in_memory = url.contains(":memory:");
    let max_connections = if in_memory { 1 } else { max_connections.max(1) };
    tracing::info!(url, max_connections, "opening sqlite pool");

    let mut options = SqlitePoolOptions::new().max_connections(max_connections);
    if in_memory {
        options = options.min_connections(1).idle_timeout(None).max_lifetime(None);
    }
    options.connect(url).await.map_err(|e| e.into_data_error())
}
