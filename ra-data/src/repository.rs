use crate::entity::Entity;
use crate::error::DataError;
use crate::query::QueryParams;
use std::future::Future;

/// Generic async data-access trait over one entity type.
///
/// Finders dispatch to the entity's named queries by name; `save`, `update`
/// and `delete` are pass-through primitives. Uses RPITIT (return-position
/// `impl Trait` in traits), no `async-trait` needed.
///
/// Per-entity finders (`find_by_name`, `find_by_points`, ...) are extension
/// traits blanket-implemented for every `DataAccess<E>`.
pub trait DataAccess<T>: Send + Sync
where
    T: Entity,
{
    /// Run `<Entity>.findAll`.
    fn find_all(&self) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;

    /// Run `<Entity>.findById`; `Ok(None)` when nothing matches.
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Option<T>, DataError>> + Send;

    /// Run a named query expected to match at most one row.
    fn find_result(
        &self,
        query: &'static str,
        params: QueryParams,
    ) -> impl Future<Output = Result<Option<T>, DataError>> + Send;

    /// Run a named query returning every matching row.
    fn find_results(
        &self,
        query: &'static str,
        params: QueryParams,
    ) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;

    /// Insert `entity`; the returned copy carries the store-assigned id.
    fn save(&self, entity: &T) -> impl Future<Output = Result<T, DataError>> + Send;

    fn update(&self, entity: &T) -> impl Future<Output = Result<T, DataError>> + Send;

    /// Delete by the entity's id. Returns whether a row was removed.
    fn delete(&self, entity: &T) -> impl Future<Output = Result<bool, DataError>> + Send;
}
