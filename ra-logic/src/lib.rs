//! # ra-logic: entities and logic for RedditAnalytic
//!
//! Sits between the presentation layer and the data layer:
//!
//! | Item | Role |
//! |------|------|
//! | [`models`] | `Subreddit`, `RedditAccount`, `Post`, `Comment` and their named queries |
//! | [`dal`] | Per-entity finder traits over [`DataAccess`](ra_data::DataAccess) |
//! | [`GenericLogic`] | Error-normalizing wrapper around a DAL plus schema-driven entity construction |
//! | [`logic`] | Per-entity field tables, domain rules and typed getters |
//! | [`TableLogic`] | Object-safe view used by table pages |
//! | [`LogicFactory`] | Name → logic registry |
//! | [`MIGRATOR`] | Embedded schema migrations |
//!
//! # Building an entity from request parameters
//!
//! ```ignore
//! let logic = SubredditLogic::new(pool);
//! let params = ParameterMap::new()
//!     .with("name", ["Test"])
//!     .with("url", ["http://t"])
//!     .with("subscribers", ["100"]);
//! let draft = logic.create_entity(&params)?;
//! let saved = logic.add(&draft).await?;
//! ```

pub mod dal;
pub mod error;
pub mod factory;
pub mod generic;
pub mod logic;
pub mod migrate;
pub mod models;
pub mod params;
pub mod schema;
pub mod table;

pub use error::LogicError;
pub use factory::{table_for, LogicConstructor, LogicFactory};
pub use generic::GenericLogic;
pub use logic::{CommentLogic, PostLogic, RedditAccountLogic, SubredditLogic};
pub use migrate::{migrate, MIGRATOR};
pub use models::{Comment, Post, RedditAccount, Subreddit};
pub use params::ParameterMap;
pub use schema::{EntitySchema, FieldKind, FieldSpec, Presence, Record};
pub use table::TableLogic;

pub mod prelude {
    //! Re-exports of the most commonly used logic types.
    pub use crate::dal::{CommentDal, PostDal, RedditAccountDal, SubredditDal};
    pub use crate::{
        Comment, CommentLogic, GenericLogic, LogicError, LogicFactory, ParameterMap, Post, PostLogic,
        RedditAccount, RedditAccountLogic, Subreddit, SubredditLogic, TableLogic,
    };
}
