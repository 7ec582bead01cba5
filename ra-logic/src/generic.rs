use crate::error::LogicError;
use crate::params::ParameterMap;
use crate::schema::{build_entity, EntitySchema};
use ra_data::{DataAccess, DataError, Entity, Value};
use ra_data_sqlx::SqlxDal;
use std::future::Future;
use std::marker::PhantomData;

/// Logic component shared by every entity kind.
///
/// Wraps a [`DataAccess`] implementation, normalizes store failures into
/// [`LogicError::Persistence`], and builds entities from raw request
/// parameters using the entity's [`EntitySchema`].
///
/// # Example
///
/// ```ignore
/// let logic = GenericLogic::<Subreddit>::new(SqlxDal::new(pool));
/// let draft = logic.create_entity(&params)?;
/// let saved = logic.add(&draft).await?;
/// ```
pub struct GenericLogic<E, D = SqlxDal<E>> {
    dal: D,
    _marker: PhantomData<E>,
}

impl<E, D: Clone> Clone for GenericLogic<E, D> {
    fn clone(&self) -> Self {
        Self {
            dal: self.dal.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E, D> GenericLogic<E, D>
where
    E: EntitySchema,
    D: DataAccess<E>,
{
    pub fn new(dal: D) -> Self {
        Self {
            dal,
            _marker: PhantomData,
        }
    }

    pub fn dal(&self) -> &D {
        &self.dal
    }

    /// Await a data-access operation, turning any store failure into
    /// [`LogicError::Persistence`].
    pub async fn get<T, F>(&self, op: F) -> Result<T, LogicError>
    where
        F: Future<Output = Result<T, DataError>>,
    {
        op.await.map_err(|err| {
            tracing::warn!(entity = E::NAME, error = %err, "data access failed");
            LogicError::Persistence(err)
        })
    }

    pub async fn get_all(&self) -> Result<Vec<E>, LogicError> {
        self.get(self.dal.find_all()).await
    }

    pub async fn get_with_id(&self, id: i64) -> Result<Option<E>, LogicError> {
        self.get(self.dal.find_by_id(id)).await
    }

    /// Persist a new entity and return it with its store-assigned id.
    pub async fn add(&self, entity: &E) -> Result<E, LogicError> {
        self.get(self.dal.save(entity)).await
    }

    pub async fn update(&self, entity: &E) -> Result<E, LogicError> {
        require_id(entity, "update")?;
        self.get(self.dal.update(entity)).await
    }

    pub async fn delete(&self, entity: &E) -> Result<bool, LogicError> {
        require_id(entity, "delete")?;
        self.get(self.dal.delete(entity)).await
    }

    /// Validate `params` and build an entity from them. Nothing is persisted.
    pub fn create_entity(&self, params: &ParameterMap) -> Result<E, LogicError> {
        build_entity::<E>(params)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        E::fields().iter().map(|f| f.label).collect()
    }

    pub fn column_codes(&self) -> Vec<&'static str> {
        E::fields().iter().map(|f| f.code).collect()
    }

    /// The entity's values, index-aligned with [`column_codes`](Self::column_codes).
    pub fn extract_data_as_list(&self, entity: &E) -> Vec<Value> {
        E::fields().iter().map(|f| (f.extract)(entity)).collect()
    }
}

fn require_id<E: Entity>(entity: &E, action: &str) -> Result<i64, LogicError> {
    entity
        .id()
        .ok_or_else(|| LogicError::Precondition(format!("cannot {action} {} without an id", E::NAME)))
}
