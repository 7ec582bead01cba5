use chrono::{DateTime, Utc};
use ra_data::{Entity, NamedQuery, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Option<i64>,
    pub reddit_account_id: i64,
    pub subreddit_id: i64,
    pub unique_id: String,
    pub points: i32,
    pub comment_count: i32,
    pub title: String,
    pub created: DateTime<Utc>,
}

pub const FIND_ALL: &str = "Post.findAll";
pub const FIND_BY_ID: &str = "Post.findById";
pub const FIND_BY_UNIQUE_ID: &str = "Post.findByUniqueId";
pub const FIND_BY_POINTS: &str = "Post.findByPoints";
pub const FIND_BY_COMMENT_COUNT: &str = "Post.findByCommentCount";
pub const FIND_BY_TITLE: &str = "Post.findByTitle";
pub const FIND_BY_CREATED: &str = "Post.findByCreated";
pub const FIND_BY_AUTHOR: &str = "Post.findByAuthor";
pub const FIND_BY_SUBREDDIT: &str = "Post.findBySubreddit";

macro_rules! select_post {
    ($tail:literal) => {
        concat!(
            "SELECT id, reddit_account_id, subreddit_id, unique_id, points, comment_count, title, created \
             FROM post ",
            $tail
        )
    };
}

static QUERIES: [NamedQuery; 9] = [
    NamedQuery::new(FIND_ALL, select_post!("ORDER BY id")),
    NamedQuery::new(FIND_BY_ID, select_post!("WHERE id = :id")),
    NamedQuery::new(FIND_BY_UNIQUE_ID, select_post!("WHERE unique_id = :uniqueId")),
    NamedQuery::new(FIND_BY_POINTS, select_post!("WHERE points = :points ORDER BY id")),
    NamedQuery::new(FIND_BY_COMMENT_COUNT, select_post!("WHERE comment_count = :commentCount ORDER BY id")),
    NamedQuery::new(FIND_BY_TITLE, select_post!("WHERE title = :title ORDER BY id")),
    NamedQuery::new(FIND_BY_CREATED, select_post!("WHERE created = :created ORDER BY id")),
    NamedQuery::new(FIND_BY_AUTHOR, select_post!("WHERE reddit_account_id = :redditAccountId ORDER BY id")),
    NamedQuery::new(FIND_BY_SUBREDDIT, select_post!("WHERE subreddit_id = :subredditId ORDER BY id")),
];

impl Entity for Post {
    const NAME: &'static str = "Post";

    fn table_name() -> &'static str {
        "post"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "reddit_account_id",
            "subreddit_id",
            "unique_id",
            "points",
            "comment_count",
            "title",
            "created",
        ]
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.reddit_account_id),
            Value::from(self.subreddit_id),
            Value::from(&self.unique_id),
            Value::from(self.points),
            Value::from(self.comment_count),
            Value::from(&self.title),
            Value::from(self.created),
        ]
    }

    fn named_queries() -> &'static [NamedQuery] {
        &QUERIES
    }
}
