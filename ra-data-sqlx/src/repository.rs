use crate::error::{SqlxErrorExt, SqlxResult};
use crate::tx::Tx;
use ra_data::query::{delete_statement, insert_statement, update_statement};
use ra_data::{CompiledQuery, DataAccess, DataError, Entity, QueryParams, Value};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Arguments, FromRow, SqlitePool};
use std::marker::PhantomData;


/// Generic SQLite-backed data-access component for one entity type.
///
/// Wraps an `sqlx::SqlitePool`; every call acquires a connection for its own
/// duration only. Mutations run inside a [`Tx`].
///
/// # Example
///
/// ```ignore
/// let dal = SqlxDal::<Subreddit>::new(pool.clone());
/// let all = dal.find_all().await?;
/// ```
pub struct SqlxDal<T> {
    pool: SqlitePool,
    _marker: PhantomData<T>,
}

impl<T> SqlxDal<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    /// Get the underlying pool reference.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl<T> Clone for SqlxDal<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> SqlxDal<T>
where
    T: Entity + for<'r> FromRow<'r, SqliteRow>,
{
    fn compile(&self, name: &str, params: &QueryParams) -> SqlxResult<CompiledQuery> {
        let query = T::named_query(name).ok_or_else(|| DataError::UnknownQuery(name.to_string()))?;
        let compiled = query.compile(params)?;
        tracing::debug!(query = name, sql = %compiled.sql, "executing named query");
        Ok(compiled)
    }

    async fn fetch_optional(&self, name: &str, params: QueryParams) -> SqlxResult<Option<T>> {
        let compiled = self.compile(name, &params)?;
        sqlx::query_as_with::<_, T, _>(&compiled.sql, arguments(compiled.values)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| e.into_data_error())
    }

    async fn fetch_all(&self, name: &str, params: QueryParams) -> SqlxResult<Vec<T>> {
        let compiled = self.compile(name, &params)?;
        sqlx::query_as_with::<_, T, _>(&compiled.sql, arguments(compiled.values)?)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| e.into_data_error())
    }
}

impl<T> DataAccess<T> for SqlxDal<T>
where
    T: Entity + for<'r> FromRow<'r, SqliteRow>,
{
    async fn find_all(&self) -> SqlxResult<Vec<T>> {
        self.fetch_all(&T::find_all_query(), QueryParams::new()).await
    }

    async fn find_by_id(&self, id: i64) -> SqlxResult<Option<T>> {
        self.fetch_optional(&T::find_by_id_query(), QueryParams::new().bind("id", id))
            .await
    }

    async fn find_result(&self, query: &'static str, params: QueryParams) -> SqlxResult<Option<T>> {
        self.fetch_optional(query, params).await
    }

    async fn find_results(&self, query: &'static str, params: QueryParams) -> SqlxResult<Vec<T>> {
        self.fetch_all(query, params).await
    }

    async fn save(&self, entity: &T) -> SqlxResult<T> {
        let sql = insert_statement(T::table_name(), T::columns())?;
        let args = arguments(entity.column_values())?;

        let mut tx = Tx::begin(&self.pool).await?;
        let result = sqlx::query_with(&sql, args)
            .execute(tx.as_mut())
            .await
            .map_err(|e| e.into_data_error())?;
        tx.commit().await?;

        let mut saved = entity.clone();
        saved.set_id(result.last_insert_rowid());
        tracing::debug!(entity = T::NAME, id = result.last_insert_rowid(), "inserted");
        Ok(saved)
    }

    async fn update(&self, entity: &T) -> SqlxResult<T> {
        let id = entity
            .id()
            .ok_or_else(|| DataError::Other(format!("cannot update {} without an id", T::NAME)))?;
        let sql = update_statement(T::table_name(), T::columns(), T::id_column())?;
        let mut values = entity.column_values();
        values.push(Value::Int(id));

        let mut tx = Tx::begin(&self.pool).await?;
        let result = sqlx::query_with(&sql, arguments(values)?)
            .execute(tx.as_mut())
            .await
            .map_err(|e| e.into_data_error())?;
        if result.rows_affected() == 0 {
            return Err(DataError::NotFound(format!("{} {id} not found", T::NAME)));
        }
        tx.commit().await?;
        Ok(entity.clone())
    }

    async fn delete(&self, entity: &T) -> SqlxResult<bool> {
        let id = entity
            .id()
            .ok_or_else(|| DataError::Other(format!("cannot delete {} without an id", T::NAME)))?;
        let sql = delete_statement(T::table_name(), T::id_column())?;

        let mut tx = Tx::begin(&self.pool).await?;
        let result = sqlx::query_with(&sql, arguments(vec![Value::Int(id)])?)
            .execute(tx.as_mut())
            .await
            .map_err(|e| e.into_data_error())?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Encode values as SQLite bind arguments, in order.
fn arguments<'q>(values: Vec<Value>) -> SqlxResult<SqliteArguments<'q>> {
    let mut args = SqliteArguments::default();
    for value in values {
        let added = match value {
            Value::Null => args.add(None::<i64>),
            Value::Bool(b) => args.add(b),
            Value::Int(i) => args.add(i),
            Value::Text(s) => args.add(s),
            Value::Timestamp(ts) => args.add(ts),
        };
        added.map_err(|e| DataError::Other(format!("failed to bind value: {e}")))?;
    }
    Ok(args)
}
