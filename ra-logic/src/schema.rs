use crate::error::LogicError;
use crate::params::ParameterMap;
use chrono::{DateTime, Utc};
use ra_data::{parse_timestamp, Entity, Value};
use std::collections::HashMap;

/// How a raw string value is converted into a typed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The entity's own identity (`i64`).
    Id,
    /// A reference to another entity's id (`i64`).
    Key,
    Integer,
    Text,
    Boolean,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// The field may be left out of the parameter map entirely.
    Optional,
}

/// One column of an entity: its field code, display label, raw length limit,
/// conversion kind, and how to read it back from an entity.
///
/// A static slice of these per entity drives construction from request
/// parameters and the tabular metadata together.
pub struct FieldSpec<E> {
    pub code: &'static str,
    pub label: &'static str,
    pub max_len: usize,
    pub kind: FieldKind,
    pub presence: Presence,
    pub extract: fn(&E) -> Value,
}

impl<E> FieldSpec<E> {
    const fn new(
        code: &'static str,
        label: &'static str,
        max_len: usize,
        kind: FieldKind,
        extract: fn(&E) -> Value,
    ) -> Self {
        Self {
            code,
            label,
            max_len,
            kind,
            presence: Presence::Required,
            extract,
        }
    }

    /// The `id` column, labelled `ID`, optional on input.
    pub const fn id(extract: fn(&E) -> Value) -> Self {
        Self::new("id", "ID", 20, FieldKind::Id, extract).optional()
    }

    pub const fn key(code: &'static str, label: &'static str, max_len: usize, extract: fn(&E) -> Value) -> Self {
        Self::new(code, label, max_len, FieldKind::Key, extract)
    }

    pub const fn integer(code: &'static str, label: &'static str, max_len: usize, extract: fn(&E) -> Value) -> Self {
        Self::new(code, label, max_len, FieldKind::Integer, extract)
    }

    pub const fn text(code: &'static str, label: &'static str, max_len: usize, extract: fn(&E) -> Value) -> Self {
        Self::new(code, label, max_len, FieldKind::Text, extract)
    }

    pub const fn boolean(code: &'static str, label: &'static str, max_len: usize, extract: fn(&E) -> Value) -> Self {
        Self::new(code, label, max_len, FieldKind::Boolean, extract)
    }

    pub const fn timestamp(code: &'static str, label: &'static str, max_len: usize, extract: fn(&E) -> Value) -> Self {
        Self::new(code, label, max_len, FieldKind::Timestamp, extract)
    }

    pub const fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }
}

/// Typed intermediate between validated parameters and an entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub id: Option<i64>,
    values: HashMap<&'static str, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: &'static str, value: Value) {
        self.values.insert(code, value);
    }

    pub fn get(&self, code: &str) -> Option<&Value> {
        self.values.get(code)
    }

    fn take(&mut self, code: &str) -> Result<Value, LogicError> {
        self.values
            .remove(code)
            .ok_or_else(|| LogicError::Precondition(format!("record has no field '{code}'")))
    }

    fn mismatch(code: &str, expected: &str, found: &Value) -> LogicError {
        LogicError::Precondition(format!("field '{code}' holds {found:?}, expected {expected}"))
    }

    pub fn text(&mut self, code: &str) -> Result<String, LogicError> {
        match self.take(code)? {
            Value::Text(s) => Ok(s),
            other => Err(Self::mismatch(code, "text", &other)),
        }
    }

    pub fn int(&mut self, code: &str) -> Result<i32, LogicError> {
        match self.take(code)? {
            Value::Int(i) => i32::try_from(i).map_err(|_| Self::mismatch(code, "a 32-bit integer", &Value::Int(i))),
            other => Err(Self::mismatch(code, "an integer", &other)),
        }
    }

    pub fn key(&mut self, code: &str) -> Result<i64, LogicError> {
        match self.take(code)? {
            Value::Int(i) => Ok(i),
            other => Err(Self::mismatch(code, "a key", &other)),
        }
    }

    pub fn boolean(&mut self, code: &str) -> Result<bool, LogicError> {
        match self.take(code)? {
            Value::Bool(b) => Ok(b),
            other => Err(Self::mismatch(code, "a boolean", &other)),
        }
    }

    pub fn timestamp(&mut self, code: &str) -> Result<DateTime<Utc>, LogicError> {
        match self.take(code)? {
            Value::Timestamp(ts) => Ok(ts),
            other => Err(Self::mismatch(code, "a timestamp", &other)),
        }
    }
}

/// An entity whose columns are described by a static [`FieldSpec`] table.
pub trait EntitySchema: Entity {
    /// Every column, id first, in display order.
    fn fields() -> &'static [FieldSpec<Self>];

    /// Build the entity from a converted record. Domain rules that span more
    /// than one raw value are checked here.
    fn from_record(record: Record) -> Result<Self, LogicError>;
}

/// Validate and convert request parameters into an entity, without touching
/// the store.
pub fn build_entity<E: EntitySchema>(params: &ParameterMap) -> Result<E, LogicError> {
    let mut record = Record::new();
    for field in E::fields() {
        if field.presence == Presence::Optional && left_blank(params, field.code) {
            continue;
        }
        let raw = params.first(field.code)?;
        check_length(field.code, raw, field.max_len)?;
        let value = convert(field.code, field.kind, raw)?;
        match (field.kind, value) {
            (FieldKind::Id, Value::Int(id)) => record.id = Some(id),
            (_, value) => record.insert(field.code, value),
        }
    }
    E::from_record(record)
}

/// An optional field counts as omitted when its key is absent or its first
/// value is blank, as with an empty form input.
fn left_blank(params: &ParameterMap, code: &str) -> bool {
    match params.get(code) {
        None => true,
        Some(Some(values)) => values.first().is_some_and(|v| v.trim().is_empty()),
        Some(None) => false,
    }
}

/// Reject blank values and values longer than `max_len` characters.
pub fn check_length(code: &str, raw: &str, max_len: usize) -> Result<(), LogicError> {
    if raw.trim().is_empty() {
        return Err(LogicError::validation(format!("{code}: value cannot be empty")));
    }
    let len = raw.chars().count();
    if len > max_len {
        return Err(LogicError::validation(format!(
            "{code}: string length is {len} > {max_len}"
        )));
    }
    Ok(())
}

fn convert(code: &str, kind: FieldKind, raw: &str) -> Result<Value, LogicError> {
    match kind {
        FieldKind::Id | FieldKind::Key => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| LogicError::validation(format!("{code}: '{raw}' is not a number: {e}"))),
        FieldKind::Integer => raw
            .trim()
            .parse::<i32>()
            .map(Value::from)
            .map_err(|e| LogicError::validation(format!("{code}: '{raw}' is not a number: {e}"))),
        FieldKind::Text => Ok(Value::Text(raw.to_string())),
        FieldKind::Boolean => parse_bool(raw.trim())
            .map(Value::Bool)
            .ok_or_else(|| LogicError::validation(format!("{code}: '{raw}' is not true or false"))),
        FieldKind::Timestamp => parse_timestamp(raw.trim())
            .map(Value::Timestamp)
            .map_err(|e| LogicError::validation(format!("{code}: {e}"))),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_length_boundaries() {
        assert!(check_length("name", "abc", 3).is_ok());
        let err = check_length("name", "abcd", 3).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: name: string length is 4 > 3");
        let err = check_length("name", "   ", 3).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: name: value cannot be empty");
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(check_length("text", "héé", 3).is_ok());
    }

    #[test]
    fn test_convert_kinds() {
        assert_eq!(convert("n", FieldKind::Integer, " 42 ").unwrap(), Value::Int(42));
        assert_eq!(convert("b", FieldKind::Boolean, "TRUE").unwrap(), Value::Bool(true));
        assert_eq!(convert("b", FieldKind::Boolean, "false").unwrap(), Value::Bool(false));
        assert_eq!(convert("t", FieldKind::Text, " keep ").unwrap(), Value::Text(" keep ".into()));
        assert!(matches!(
            convert("c", FieldKind::Timestamp, "Sat Oct 17 14:03:09 UTC 2026").unwrap(),
            Value::Timestamp(_)
        ));
    }

    #[test]
    fn test_convert_rejects_garbage() {
        assert!(matches!(convert("n", FieldKind::Integer, "4x"), Err(LogicError::Validation(_))));
        assert!(matches!(convert("n", FieldKind::Integer, "99999999999"), Err(LogicError::Validation(_))));
        assert!(matches!(convert("b", FieldKind::Boolean, "yes"), Err(LogicError::Validation(_))));
        assert!(matches!(convert("c", FieldKind::Timestamp, "2026-10-17"), Err(LogicError::Validation(_))));
    }

    #[test]
    fn test_record_type_mismatch_is_precondition() {
        let mut record = Record::new();
        record.insert("name", Value::Int(1));
        assert!(matches!(record.text("name"), Err(LogicError::Precondition(_))));
        assert!(matches!(record.int("absent"), Err(LogicError::Precondition(_))));
    }
}
