use ra_data::DataError;

/// Errors surfaced by the logic layer.
///
/// Reading a field from a [`ParameterMap`](crate::ParameterMap) fails with
/// `MissingField`, `EmptyValues` or `NullValues` depending on the key's state.
#[derive(Debug)]
pub enum LogicError {
    /// A value is blank, too long, or breaks a domain rule.
    Validation(String),
    /// The API was used incorrectly (e.g. updating an entity without an id).
    Precondition(String),
    /// The field code is absent from the parameter map.
    MissingField(String),
    /// The field code is present but its value list is empty.
    EmptyValues(String),
    /// The field code is present but bound to a null value list.
    NullValues(String),
    /// Any failure of the underlying store.
    Persistence(DataError),
}

impl LogicError {
    pub fn validation(message: impl Into<String>) -> Self {
        LogicError::Validation(message.into())
    }

    /// Whether the failure was caused by the caller rather than the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, LogicError::Persistence(_))
    }
}

impl std::fmt::Display for LogicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicError::Validation(msg) => write!(f, "Validation failed: {msg}"),
            LogicError::Precondition(msg) => write!(f, "Precondition failed: {msg}"),
            LogicError::MissingField(code) => write!(f, "Missing field: {code}"),
            LogicError::EmptyValues(code) => write!(f, "No value supplied for field: {code}"),
            LogicError::NullValues(code) => write!(f, "Null value list for field: {code}"),
            LogicError::Persistence(err) => write!(f, "Persistence failure: {err}"),
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<garde::Report> for LogicError {
    fn from(report: garde::Report) -> Self {
        let mut messages = Vec::new();
        for (path, error) in report.iter() {
            let field = {
                let s = path.to_string();
                if s.is_empty() { "value".to_string() } else { s }
            };
            messages.push(format!("{field}: {}", error.message()));
        }
        LogicError::Validation(messages.join("; "))
    }
}
