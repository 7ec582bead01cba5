use ra_data::{Entity, NamedQuery, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subreddit {
    pub id: Option<i64>,
    pub name: String,
    pub url: String,
    pub subscribers: i32,
}

pub const FIND_ALL: &str = "Subreddit.findAll";
pub const FIND_BY_ID: &str = "Subreddit.findById";
pub const FIND_BY_NAME: &str = "Subreddit.findByName";
pub const FIND_BY_URL: &str = "Subreddit.findByUrl";
pub const FIND_BY_SUBSCRIBERS: &str = "Subreddit.findBySubscribers";

static QUERIES: [NamedQuery; 5] = [
    NamedQuery::new(FIND_ALL, "SELECT id, name, url, subscribers FROM subreddit ORDER BY id"),
    NamedQuery::new(FIND_BY_ID, "SELECT id, name, url, subscribers FROM subreddit WHERE id = :id"),
    NamedQuery::new(FIND_BY_NAME, "SELECT id, name, url, subscribers FROM subreddit WHERE name = :name"),
    NamedQuery::new(FIND_BY_URL, "SELECT id, name, url, subscribers FROM subreddit WHERE url = :url"),
    NamedQuery::new(
        FIND_BY_SUBSCRIBERS,
        "SELECT id, name, url, subscribers FROM subreddit WHERE subscribers = :subscribers ORDER BY id",
    ),
];

impl Entity for Subreddit {
    const NAME: &'static str = "Subreddit";

    fn table_name() -> &'static str {
        "subreddit"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["name", "url", "subscribers"]
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
            Value::from(&self.url),
            Value::from(self.subscribers),
        ]
    }

    fn named_queries() -> &'static [NamedQuery] {
        &QUERIES
    }
}
