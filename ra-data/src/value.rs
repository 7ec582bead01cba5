use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Serialize, Serializer};

/// Textual timestamp layout shared by forms, tables, and parsing:
/// `EEE MMM dd HH:mm:ss zzz yyyy`, e.g. `Sat Oct 17 14:03:09 UTC 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

const ZONE_LESS_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// A single column value, used both for query parameters and for extracted
/// table cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Text(s) => f.write_str(s),
            Value::Timestamp(ts) => f.write_str(&format_timestamp(ts)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Timestamp(ts) => serializer.serialize_str(&format_timestamp(ts)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Error returned by [`parse_timestamp`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampError(pub String);

impl std::fmt::Display for TimestampError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid timestamp: {}", self.0)
    }
}

impl std::error::Error for TimestampError {}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp written in [`TIMESTAMP_FORMAT`].
///
/// Only UTC-equivalent zone names (`UTC`, `GMT`, `Z`) are accepted in the
/// zone position.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 6 {
        return Err(TimestampError(format!(
            "'{input}' does not match EEE MMM dd HH:mm:ss zzz yyyy"
        )));
    }
    if !matches!(parts[4], "UTC" | "GMT" | "Z") {
        return Err(TimestampError(format!("unsupported time zone '{}'", parts[4])));
    }
    let zone_less = format!(
        "{} {} {} {} {}",
        parts[0], parts[1], parts[2], parts[3], parts[5]
    );
    let naive = NaiveDateTime::parse_from_str(&zone_less, ZONE_LESS_FORMAT)
        .map_err(|e| TimestampError(format!("'{input}': {e}")))?;
    Ok(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_utc_timestamp() {
        let ts = parse_timestamp("Sat Oct 17 14:03:09 UTC 2026").unwrap();
        assert_eq!(ts.year(), 2026);
        assert_eq!(ts.month(), 10);
        assert_eq!(ts.day(), 17);
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (14, 3, 9));
    }

    #[test]
    fn test_format_matches_parse() {
        let ts = parse_timestamp("Thu Jan 01 00:00:00 GMT 2015").unwrap();
        assert_eq!(format_timestamp(&ts), "Thu Jan 01 00:00:00 UTC 2015");
        assert_eq!(parse_timestamp(&format_timestamp(&ts)).unwrap(), ts);
    }

    #[test]
    fn test_rejects_foreign_zone() {
        let err = parse_timestamp("Sat Oct 17 14:03:09 EST 2026").unwrap_err();
        assert!(err.0.contains("EST"));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(parse_timestamp("2026-10-17T14:03:09Z").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_rejects_wrong_weekday() {
        assert!(parse_timestamp("Mon Oct 17 14:03:09 UTC 2026").is_err());
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!(Value::from(7i32).to_string(), "7");
        assert_eq!(Value::from(None::<i64>).to_string(), "");
        assert_eq!(Value::from("abc").to_string(), "abc");
        let json = serde_json::to_string(&vec![
            Value::Int(1),
            Value::Null,
            Value::Bool(true),
            Value::from("x"),
        ])
        .unwrap();
        assert_eq!(json, r#"[1,null,true,"x"]"#);
    }
}
