//! Transaction wrapper scoped to a single data-access call.

use crate::error::{SqlxErrorExt, SqlxResult};
use sqlx::{Database, Pool, Transaction};

/// A wrapper around SQLx [`Transaction`].
///
/// - Begun from a pool with [`Tx::begin`]
/// - Committed explicitly with [`Tx::commit`]
/// - Rolled back when dropped without a commit (error paths, panics)
///
/// # Example
///
/// ```ignore
/// let mut tx = Tx::begin(&pool).await?;
/// sqlx::query("DELETE FROM subreddit WHERE id = ?")
///     .bind(id)
///     .execute(tx.as_mut())
///     .await
///     .map_err(|e| e.into_data_error())?;
/// tx.commit().await?;
/// ```
pub struct Tx<'a, DB: Database>(Transaction<'a, DB>);

impl<DB: Database> Tx<'static, DB> {
    /// Begin a new transaction on a connection acquired from `pool`.
    pub async fn begin(pool: &Pool<DB>) -> SqlxResult<Self> {
        let tx = pool.begin().await.map_err(|e| e.into_data_error())?;
        Ok(Tx(tx))
    }
}

impl<'a, DB: Database> Tx<'a, DB> {
    /// Returns a mutable reference to the underlying connection.
    pub fn as_mut(&mut self) -> &mut <DB as Database>::Connection {
        &mut *self.0
    }

    /// Commit and release the connection back to the pool.
    pub async fn commit(self) -> SqlxResult<()> {
        self.0.commit().await.map_err(|e| e.into_data_error())
    }
}
