use crate::generic::GenericLogic;
use crate::models::{Comment, Post, RedditAccount, Subreddit};
use crate::schema::EntitySchema;
use crate::table::TableLogic;
use ra_data::Entity;
use ra_data_sqlx::SqlxDal;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

/// Builds a logic component on top of a pool.
pub type LogicConstructor = fn(SqlitePool) -> Arc<dyn TableLogic>;

const LOGIC_SUFFIX: &str = "Logic";

/// Registry mapping entity names to logic constructors.
///
/// Names resolve with or without the `Logic` suffix, so `"Subreddit"` and
/// `"SubredditLogic"` return the same kind of component. Entries keep their
/// registration order.
///
/// ```ignore
/// let factory = LogicFactory::with_defaults(pool);
/// let logic = factory.get_for("Subreddit").expect("registered");
/// let rows = logic.rows().await?;
/// ```
#[derive(Clone)]
pub struct LogicFactory {
    pool: SqlitePool,
    registry: Vec<(&'static str, LogicConstructor)>,
}

impl LogicFactory {
    /// An empty registry.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            registry: Vec::new(),
        }
    }

    /// A registry holding the four RedditAnalytic entities.
    pub fn with_defaults(pool: SqlitePool) -> Self {
        Self::new(pool)
            .register(Subreddit::NAME, table_for::<Subreddit>)
            .register(RedditAccount::NAME, table_for::<RedditAccount>)
            .register(Post::NAME, table_for::<Post>)
            .register(Comment::NAME, table_for::<Comment>)
    }

    /// Register `constructor` under `name`, replacing an earlier entry.
    pub fn register(mut self, name: &'static str, constructor: LogicConstructor) -> Self {
        match self.registry.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = constructor,
            None => self.registry.push((name, constructor)),
        }
        self
    }

    pub fn entity_names(&self) -> Vec<&'static str> {
        self.registry.iter().map(|(name, _)| *name).collect()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Construct the logic component registered under `name`.
    ///
    /// Returns `None` (and logs a warning) for an unknown name.
    pub fn get_for(&self, name: &str) -> Option<Arc<dyn TableLogic>> {
        let key = name.strip_suffix(LOGIC_SUFFIX).unwrap_or(name);
        match self.registry.iter().find(|(n, _)| *n == key) {
            Some((_, constructor)) => Some(constructor(self.pool.clone())),
            None => {
                tracing::warn!(name, "no logic registered for entity");
                None
            }
        }
    }
}

/// Default constructor: a [`GenericLogic`] over an [`SqlxDal`] for `E`.
pub fn table_for<E>(pool: SqlitePool) -> Arc<dyn TableLogic>
where
    E: EntitySchema + for<'r> FromRow<'r, SqliteRow>,
{
    Arc::new(GenericLogic::<E, SqlxDal<E>>::new(SqlxDal::new(pool)))
}
