//! # ra-data-sqlx: SQLx backend for the RedditAnalytic data layer
//!
//! This crate provides the [SQLx](https://github.com/launchbadge/sqlx)-specific
//! implementation of the data access layer. It depends on [`ra-data`] for the
//! abstract traits and types, and adds the generic DAL, transaction wrapper,
//! and error bridging needed to talk to a real SQLite database.
//!
//! # What's in this crate
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SqlxDal`] | Generic `DataAccess<T>` implementation holding an `sqlx::SqlitePool` |
//! | [`Tx`] | Transaction wrapper with explicit commit, rollback on drop |
//! | [`connect`] | Pool constructor that keeps in-memory databases on one connection |
//! | [`SqlxErrorExt`] | Extension trait to convert `sqlx::Error` → `DataError` (`.into_data_error()`) |
//! | [`SqlxResult<T>`] | Type alias for `Result<T, DataError>` |
//!
//! # Quick start
//!
//! ```ignore
//! use ra_data::DataAccess;
//! use ra_data_sqlx::{connect, SqlxDal};
//!
//! let pool = connect("sqlite::memory:", 1).await?;
//! let dal = SqlxDal::<Subreddit>::new(pool.clone());
//! let found = dal.find_by_id(1).await?;
//! ```
//!
//! # Named queries
//!
//! Finders resolve the query by name from the entity's
//! [`Entity::named_queries`](ra_data::Entity::named_queries) table, compile
//! its `:param` placeholders to `?`, and bind values in order. An unknown name
//! surfaces as `DataError::UnknownQuery`, an unbound parameter as
//! `DataError::MissingParameter`.
//!
//! # Error bridging
//!
//! Due to Rust's orphan rules, `From<sqlx::Error> for DataError` can't be
//! implemented here. Use the [`SqlxErrorExt`] trait instead:
//!
//! ```ignore
//! use ra_data_sqlx::SqlxErrorExt;
//!
//! let row = sqlx::query("SELECT ...")
//!     .fetch_one(&pool)
//!     .await
//!     .map_err(|e| e.into_data_error())?;
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod tx;

pub use error::{SqlxErrorExt, SqlxResult};
pub use pool::connect;
pub use repository::SqlxDal;
pub use tx::Tx;

/// Re-exports of the most commonly used types from both `ra-data` and this crate.
pub mod prelude {
    pub use crate::{connect, SqlxDal, SqlxErrorExt, Tx};
    pub use ra_data::prelude::*;
}
