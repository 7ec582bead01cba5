use ra_data::DataError;

/// Conversion of SQLx failures into [`DataError`].
///
/// `From<sqlx::Error> for DataError` would break the orphan rule, so the
/// bridge is a method: `.map_err(|e| e.into_data_error())`.
pub trait SqlxErrorExt {
    fn into_data_error(self) -> DataError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_data_error(self) -> DataError {
        match &self {
            sqlx::Error::RowNotFound => DataError::NotFound("no matching row".into()),
            sqlx::Error::Database(db) => {
                tracing::debug!(code = ?db.code(), kind = ?db.kind(), "statement rejected by sqlite");
                DataError::database(self)
            }
            _ => DataError::database(self),
        }
    }
}

impl SqlxErrorExt for sqlx::migrate::MigrateError {
    fn into_data_error(self) -> DataError {
        DataError::database(self)
    }
}

/// Result alias for the SQLx-backed data layer.
pub type SqlxResult<T> = Result<T, DataError>;
