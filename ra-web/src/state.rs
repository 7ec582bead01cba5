use crate::error::WebError;
use ra_logic::{LogicFactory, TableLogic};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub factory: LogicFactory,
}

impl AppState {
    pub fn new(factory: LogicFactory) -> Self {
        Self { factory }
    }

    /// Resolve the logic component for `entity`, or `UnknownEntity`.
    pub fn logic_for(&self, entity: &str) -> Result<Arc<dyn TableLogic>, WebError> {
        self.factory
            .get_for(entity)
            .ok_or_else(|| WebError::UnknownEntity(entity.to_string()))
    }
}
