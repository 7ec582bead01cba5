use chrono::{DateTime, Utc};
use ra_data::{Entity, NamedQuery, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RedditAccount {
    pub id: Option<i64>,
    pub name: String,
    pub created: DateTime<Utc>,
    pub link_points: i32,
    pub comment_points: i32,
}

pub const FIND_ALL: &str = "RedditAccount.findAll";
pub const FIND_BY_ID: &str = "RedditAccount.findById";
pub const FIND_BY_NAME: &str = "RedditAccount.findByName";
pub const FIND_BY_LINK_POINTS: &str = "RedditAccount.findByLinkPoints";
pub const FIND_BY_COMMENT_POINTS: &str = "RedditAccount.findByCommentPoints";
pub const FIND_BY_CREATED: &str = "RedditAccount.findByCreated";

static QUERIES: [NamedQuery; 6] = [
    NamedQuery::new(
        FIND_ALL,
        "SELECT id, name, created, link_points, comment_points FROM reddit_account ORDER BY id",
    ),
    NamedQuery::new(
        FIND_BY_ID,
        "SELECT id, name, created, link_points, comment_points FROM reddit_account WHERE id = :id",
    ),
    NamedQuery::new(
        FIND_BY_NAME,
        "SELECT id, name, created, link_points, comment_points FROM reddit_account WHERE name = :name",
    ),
    NamedQuery::new(
        FIND_BY_LINK_POINTS,
        "SELECT id, name, created, link_points, comment_points FROM reddit_account \
         WHERE link_points = :linkPoints ORDER BY id",
    ),
    NamedQuery::new(
        FIND_BY_COMMENT_POINTS,
        "SELECT id, name, created, link_points, comment_points FROM reddit_account \
         WHERE comment_points = :commentPoints ORDER BY id",
    ),
    NamedQuery::new(
        FIND_BY_CREATED,
        "SELECT id, name, created, link_points, comment_points FROM reddit_account \
         WHERE created = :created ORDER BY id",
    ),
];

impl Entity for RedditAccount {
    const NAME: &'static str = "RedditAccount";

    fn table_name() -> &'static str {
        "reddit_account"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["name", "created", "link_points", "comment_points"]
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::from(&self.name),
            Value::from(self.created),
            Value::from(self.link_points),
            Value::from(self.comment_points),
        ]
    }

    fn named_queries() -> &'static [NamedQuery] {
        &QUERIES
    }
}
