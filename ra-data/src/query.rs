//! Named, parameterized queries and the generic CRUD statements.
//!
//! A [`NamedQuery`] is declared alongside its entity with `:param`
//! placeholders. At execution time it is compiled against a [`QueryParams`]
//! map into SQLite `?` placeholders plus the ordered list of bound values.
//!
//! # Example
//!
//! ```ignore
//! const FIND_BY_NAME: NamedQuery =
//!     NamedQuery::new("Subreddit.findByName", "SELECT * FROM subreddit WHERE name = :name");
//! let compiled = FIND_BY_NAME.compile(&QueryParams::new().bind("name", "rust"))?;
//! assert_eq!(compiled.sql, "SELECT * FROM subreddit WHERE name = ?");
//! ```

use crate::error::DataError;
use crate::value::Value;

/// SQLite positional placeholder.
const PLACEHOLDER: &str = "?";

/// A predefined query identified by name, bound to one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedQuery {
    pub name: &'static str,
    pub sql: &'static str,
}

/// Result of compiling a [`NamedQuery`]: positional SQL plus values in bind order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub values: Vec<Value>,
}

impl NamedQuery {
    pub const fn new(name: &'static str, sql: &'static str) -> Self {
        Self { name, sql }
    }

    /// Placeholder names in order of appearance (repeats included).
    pub fn parameter_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        // the closure never fails, so neither does the rewrite
        let _ = rewrite_placeholders(self.sql, |name| {
            names.push(name.to_string());
            Ok(String::new())
        });
        names
    }

    /// Substitute every `:name` with a positional placeholder and collect the
    /// matching values from `params`.
    pub fn compile(&self, params: &QueryParams) -> Result<CompiledQuery, DataError> {
        let mut values = Vec::new();
        let sql = rewrite_placeholders(self.sql, |name| {
            let value = params.get(name).ok_or_else(|| DataError::MissingParameter {
                query: self.name.to_string(),
                param: name.to_string(),
            })?;
            values.push(value.clone());
            Ok(PLACEHOLDER.to_string())
        })?;
        Ok(CompiledQuery { sql, values })
    }
}

/// Parameter-name to value map used for substitution into a named query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Value)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` to `:name`, replacing any previous binding.
    pub fn bind(mut self, name: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Walk `sql`, replacing each `:identifier` outside string literals with the
/// output of `placeholder`.
fn rewrite_placeholders(
    sql: &str,
    mut placeholder: impl FnMut(&str) -> Result<String, DataError>,
) -> Result<String, DataError> {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.char_indices().peekable();
    let mut in_literal = false;

    while let Some((i, c)) = chars.next() {
        if in_literal {
            out.push(c);
            if c == '\'' {
                in_literal = false;
            }
            continue;
        }
        match c {
            '\'' => {
                in_literal = true;
                out.push(c);
            }
            ':' if matches!(chars.peek(), Some(&(_, n)) if n.is_ascii_alphabetic() || n == '_') => {
                let start = i + 1;
                let mut end = start;
                while let Some(&(j, n)) = chars.peek() {
                    if n.is_ascii_alphanumeric() || n == '_' {
                        end = j + n.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                out.push_str(&placeholder(&sql[start..end])?);
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

// ── Generic CRUD statements ────────────────────────────────

/// `INSERT INTO "table" ("a", "b") VALUES (?, ?)`
pub fn insert_statement(table: &str, columns: &[&str]) -> Result<String, DataError> {
    let table = quote_checked(table, "table")?;
    let mut names = Vec::with_capacity(columns.len());
    let mut placeholders = Vec::with_capacity(columns.len());
    for col in columns {
        names.push(quote_checked(col, "column")?);
        placeholders.push(PLACEHOLDER);
    }
    Ok(format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        names.join(", "),
        placeholders.join(", ")
    ))
}

/// `UPDATE "table" SET "a" = ?, "b" = ? WHERE "id" = ?`
///
/// The id value is bound last.
pub fn update_statement(table: &str, columns: &[&str], id_column: &str) -> Result<String, DataError> {
    let table = quote_checked(table, "table")?;
    let mut assignments = Vec::with_capacity(columns.len());
    for col in columns {
        let col = quote_checked(col, "column")?;
        assignments.push(format!("{col} = {PLACEHOLDER}"));
    }
    let id_column = quote_checked(id_column, "column")?;
    Ok(format!(
        "UPDATE {table} SET {} WHERE {id_column} = {PLACEHOLDER}",
        assignments.join(", ")
    ))
}

/// `DELETE FROM "table" WHERE "id" = ?`
pub fn delete_statement(table: &str, id_column: &str) -> Result<String, DataError> {
    let table = quote_checked(table, "table")?;
    let id_column = quote_checked(id_column, "column")?;
    Ok(format!("DELETE FROM {table} WHERE {id_column} = {PLACEHOLDER}"))
}

fn quote_checked(ident: &str, kind: &str) -> Result<String, DataError> {
    if !is_valid_identifier(ident) {
        return Err(DataError::Other(format!("invalid {kind} identifier: {ident}")));
    }
    Ok(format!("\"{ident}\""))
}

fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const BY_NAME: NamedQuery =
        NamedQuery::new("Subreddit.findByName", "SELECT * FROM subreddit WHERE name = :name");

    #[test]
    fn test_compile_sqlite() {
        let compiled = BY_NAME
            .compile(&QueryParams::new().bind("name", "rust"))
            .unwrap();
        assert_eq!(compiled.sql, "SELECT * FROM subreddit WHERE name = ?");
        assert_eq!(compiled.values, vec![Value::from("rust")]);
    }

    #[test]
    fn test_compile_repeats_values_in_order() {
        let q = NamedQuery::new(
            "Post.findByPair",
            "SELECT * FROM post WHERE points = :points AND title = :title OR points > :points",
        );
        let params = QueryParams::new().bind("title", "hello").bind("points", 3i32);
        let compiled = q.compile(&params).unwrap();
        assert_eq!(
            compiled.sql,
            "SELECT * FROM post WHERE points = ? AND title = ? OR points > ?"
        );
        assert_eq!(
            compiled.values,
            vec![Value::Int(3), Value::from("hello"), Value::Int(3)]
        );
    }

    #[test]
    fn test_no_parameters() {
        let q = NamedQuery::new("Subreddit.findAll", "SELECT * FROM subreddit");
        let compiled = q.compile(&QueryParams::new()).unwrap();
        assert_eq!(compiled.sql, "SELECT * FROM subreddit");
        assert!(compiled.values.is_empty());
        assert!(q.parameter_names().is_empty());
    }

    #[test]
    fn test_missing_parameter() {
        let err = BY_NAME.compile(&QueryParams::new()).unwrap_err();
        match err {
            DataError::MissingParameter { query, param } => {
                assert_eq!(query, "Subreddit.findByName");
                assert_eq!(param, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_literals_untouched() {
        let q = NamedQuery::new(
            "Comment.weird",
            "SELECT ':notparam', id FROM comment WHERE text = :text",
        );
        assert_eq!(q.parameter_names(), vec!["text".to_string()]);
        let compiled = q
            .compile(&QueryParams::new().bind("text", "hi"))
            .unwrap();
        assert_eq!(
            compiled.sql,
            "SELECT ':notparam', id FROM comment WHERE text = ?"
        );
    }

    #[test]
    fn test_bind_replaces() {
        let params = QueryParams::new().bind("id", 1i64).bind("id", 2i64);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_crud_statements() {
        assert_eq!(
            insert_statement("subreddit", &["name", "url"]).unwrap(),
            "INSERT INTO \"subreddit\" (\"name\", \"url\") VALUES (?, ?)"
        );
        assert_eq!(
            update_statement("subreddit", &["name", "url"], "id").unwrap(),
            "UPDATE \"subreddit\" SET \"name\" = ?, \"url\" = ? WHERE \"id\" = ?"
        );
        assert_eq!(
            delete_statement("subreddit", "id").unwrap(),
            "DELETE FROM \"subreddit\" WHERE \"id\" = ?"
        );
    }

    #[test]
    fn test_invalid_identifier() {
        let err = insert_statement("subreddit;drop", &["name"]).unwrap_err();
        assert!(matches!(err, DataError::Other(_)));
    }
}
