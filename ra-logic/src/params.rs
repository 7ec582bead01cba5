use crate::error::LogicError;
use std::collections::HashMap;

/// Raw request parameters: field code to list of string values.
///
/// Mirrors form-submission semantics, where a key may repeat and each
/// occurrence appends a value. A key may also be bound to a null list, which
/// is kept distinct from an empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    entries: HashMap<String, Option<Vec<String>>>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<I>(mut self, code: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.insert(code, values);
        self
    }

    /// Bind `code` to `values`, replacing any previous binding.
    pub fn insert<I>(&mut self, code: &str, values: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.entries.insert(code.to_string(), Some(values));
    }

    /// Bind `code` to a null value list.
    pub fn insert_null(&mut self, code: &str) {
        self.entries.insert(code.to_string(), None);
    }

    /// Append one value under `code`, creating the list if needed.
    pub fn append(&mut self, code: &str, value: impl Into<String>) {
        self.entries
            .entry(code.to_string())
            .or_insert_with(|| Some(Vec::new()))
            .get_or_insert_with(Vec::new)
            .push(value.into());
    }

    pub fn remove(&mut self, code: &str) {
        self.entries.remove(code);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// The value list bound to `code`: `None` when absent, `Some(None)` when null.
    pub fn get(&self, code: &str) -> Option<Option<&[String]>> {
        self.entries.get(code).map(|v| v.as_deref())
    }

    /// First value bound to `code`.
    pub fn first(&self, code: &str) -> Result<&str, LogicError> {
        match self.entries.get(code) {
            None => Err(LogicError::MissingField(code.to_string())),
            Some(None) => Err(LogicError::NullValues(code.to_string())),
            Some(Some(values)) => values
                .first()
                .map(String::as_str)
                .ok_or_else(|| LogicError::EmptyValues(code.to_string())),
        }
    }

    /// Entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&[String]>)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = ParameterMap::new();
        for (k, v) in iter {
            map.append(k.as_ref(), v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value() {
        let map = ParameterMap::new().with("name", ["a", "b"]);
        assert_eq!(map.first("name").unwrap(), "a");
    }

    #[test]
    fn test_three_failure_kinds() {
        let mut map = ParameterMap::new().with("empty", Vec::<String>::new());
        map.insert_null("null");

        assert!(matches!(map.first("absent"), Err(LogicError::MissingField(c)) if c == "absent"));
        assert!(matches!(map.first("empty"), Err(LogicError::EmptyValues(c)) if c == "empty"));
        assert!(matches!(map.first("null"), Err(LogicError::NullValues(c)) if c == "null"));
    }

    #[test]
    fn test_repeated_keys_accumulate() {
        let map: ParameterMap = vec![("tag", "x"), ("tag", "y"), ("name", "n")]
            .into_iter()
            .collect();
        assert_eq!(map.get("tag"), Some(Some(&["x".to_string(), "y".to_string()][..])));
        assert_eq!(map.len(), 2);
        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "tag"]);
    }

    #[test]
    fn test_append_after_null_starts_list() {
        let mut map = ParameterMap::new();
        map.insert_null("x");
        map.append("x", "1");
        assert_eq!(map.first("x").unwrap(), "1");
    }
}
