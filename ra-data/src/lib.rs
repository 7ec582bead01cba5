pub mod entity;
pub mod error;
pub mod query;
pub mod repository;
pub mod value;

pub use entity::Entity;
pub use error::DataError;
pub use query::{CompiledQuery, NamedQuery, QueryParams};
pub use repository::DataAccess;
pub use value::{format_timestamp, parse_timestamp, TimestampError, Value, TIMESTAMP_FORMAT};

pub mod prelude {
    //! Re-exports of the most commonly used data types.
    pub use crate::{DataAccess, DataError, Entity, NamedQuery, QueryParams, Value};
}
