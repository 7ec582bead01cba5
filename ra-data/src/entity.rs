use crate::query::NamedQuery;
use crate::value::Value;

/// Trait representing a persisted entity: its table, its columns, and the
/// named queries declared alongside it.
///
/// `columns()` lists every persisted column except the id column, in the same
/// order as the values returned by `column_values()`.
///
/// # Example
///
/// ```ignore
/// impl Entity for Subreddit {
///     const NAME: &'static str = "Subreddit";
///     fn table_name() -> &'static str { "subreddit" }
///     fn id_column() -> &'static str { "id" }
///     fn columns() -> &'static [&'static str] { &["name", "url", "subscribers"] }
///     fn id(&self) -> Option<i64> { self.id }
///     fn set_id(&mut self, id: i64) { self.id = Some(id) }
///     fn column_values(&self) -> Vec<Value> { ... }
///     fn named_queries() -> &'static [NamedQuery] { &SUBREDDIT_QUERIES }
/// }
/// ```
pub trait Entity: Clone + Send + Sync + Unpin + 'static {
    /// Entity name, also the prefix of its named queries (`Subreddit.findAll`).
    const NAME: &'static str;

    fn table_name() -> &'static str;
    fn id_column() -> &'static str;
    fn columns() -> &'static [&'static str];
    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
    fn column_values(&self) -> Vec<Value>;
    fn named_queries() -> &'static [NamedQuery];

    /// Look up one of this entity's named queries.
    fn named_query(name: &str) -> Option<&'static NamedQuery> {
        Self::named_queries().iter().find(|q| q.name == name)
    }

    fn find_all_query() -> String {
        format!("{}.findAll", Self::NAME)
    }

    fn find_by_id_query() -> String {
        format!("{}.findById", Self::NAME)
    }
}
