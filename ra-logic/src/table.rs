use crate::error::LogicError;
use crate::generic::GenericLogic;
use crate::params::ParameterMap;
use crate::schema::EntitySchema;
use async_trait::async_trait;
use ra_data::{DataAccess, Value};

/// Entity-erased view of a logic component, as used by table pages.
///
/// Object-safe so the [`LogicFactory`](crate::LogicFactory) can hand out
/// `Arc<dyn TableLogic>` for any registered entity.
#[async_trait]
pub trait TableLogic: Send + Sync {
    fn entity_name(&self) -> &'static str;

    fn column_names(&self) -> Vec<&'static str>;

    fn column_codes(&self) -> Vec<&'static str>;

    /// Every stored entity as a row of values.
    async fn rows(&self) -> Result<Vec<Vec<Value>>, LogicError>;

    async fn row_with_id(&self, id: i64) -> Result<Option<Vec<Value>>, LogicError>;

    /// Build an entity from `params` and persist it: an update when the
    /// parameters carry an id, an insert otherwise. Returns the stored row.
    async fn submit(&self, params: &ParameterMap) -> Result<Vec<Value>, LogicError>;

    /// Remove the entity with `id`. `Ok(false)` when nothing was stored under it.
    async fn delete_with_id(&self, id: i64) -> Result<bool, LogicError>;
}

#[async_trait]
impl<E, D> TableLogic for GenericLogic<E, D>
where
    E: EntitySchema,
    D: DataAccess<E> + 'static,
{
    fn entity_name(&self) -> &'static str {
        E::NAME
    }

    fn column_names(&self) -> Vec<&'static str> {
        GenericLogic::column_names(self)
    }

    fn column_codes(&self) -> Vec<&'static str> {
        GenericLogic::column_codes(self)
    }

    async fn rows(&self) -> Result<Vec<Vec<Value>>, LogicError> {
        let all = self.get_all().await?;
        Ok(all.iter().map(|e| self.extract_data_as_list(e)).collect())
    }

    async fn row_with_id(&self, id: i64) -> Result<Option<Vec<Value>>, LogicError> {
        let found = self.get_with_id(id).await?;
        Ok(found.map(|e| self.extract_data_as_list(&e)))
    }

    async fn submit(&self, params: &ParameterMap) -> Result<Vec<Value>, LogicError> {
        let entity = self.create_entity(params)?;
        let stored = if entity.id().is_some() {
            self.update(&entity).await?
        } else {
            self.add(&entity).await?
        };
        tracing::debug!(entity = E::NAME, id = ?stored.id(), "submitted");
        Ok(self.extract_data_as_list(&stored))
    }

    async fn delete_with_id(&self, id: i64) -> Result<bool, LogicError> {
        match self.get_with_id(id).await? {
            Some(entity) => self.delete(&entity).await,
            None => Ok(false),
        }
    }
}
