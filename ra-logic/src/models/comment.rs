use chrono::{DateTime, Utc};
use ra_data::{Entity, NamedQuery, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Option<i64>,
    pub unique_id: String,
    pub reddit_account_id: i64,
    pub post_id: i64,
    pub text: String,
    pub created: DateTime<Utc>,
    pub points: i32,
    pub is_reply: bool,
    pub replys: i32,
}

pub const FIND_ALL: &str = "Comment.findAll";
pub const FIND_BY_ID: &str = "Comment.findById";
pub const FIND_BY_UNIQUE_ID: &str = "Comment.findByUniqueId";
pub const FIND_BY_TEXT: &str = "Comment.findByText";
pub const FIND_BY_CREATED: &str = "Comment.findByCreated";
pub const FIND_BY_POINTS: &str = "Comment.findByPoints";
pub const FIND_BY_REPLYS: &str = "Comment.findByReplys";
pub const FIND_BY_IS_REPLY: &str = "Comment.findByIsReply";
pub const FIND_BY_AUTHOR: &str = "Comment.findByAuthor";
pub const FIND_BY_POST: &str = "Comment.findByPost";

macro_rules! select_comment {
    ($tail:literal) => {
        concat!(
            "SELECT id, unique_id, reddit_account_id, post_id, text, created, points, is_reply, replys \
             FROM comment ",
            $tail
        )
    };
}

static QUERIES: [NamedQuery; 10] = [
    NamedQuery::new(FIND_ALL, select_comment!("ORDER BY id")),
    NamedQuery::new(FIND_BY_ID, select_comment!("WHERE id = :id")),
    NamedQuery::new(FIND_BY_UNIQUE_ID, select_comment!("WHERE unique_id = :uniqueId")),
    NamedQuery::new(FIND_BY_TEXT, select_comment!("WHERE text = :text ORDER BY id")),
    NamedQuery::new(FIND_BY_CREATED, select_comment!("WHERE created = :created ORDER BY id")),
    NamedQuery::new(FIND_BY_POINTS, select_comment!("WHERE points = :points ORDER BY id")),
    NamedQuery::new(FIND_BY_REPLYS, select_comment!("WHERE replys = :replys ORDER BY id")),
    NamedQuery::new(FIND_BY_IS_REPLY, select_comment!("WHERE is_reply = :isReply ORDER BY id")),
    NamedQuery::new(FIND_BY_AUTHOR, select_comment!("WHERE reddit_account_id = :redditAccountId ORDER BY id")),
    NamedQuery::new(FIND_BY_POST, select_comment!("WHERE post_id = :postId ORDER BY id")),
];

impl Entity for Comment {
    const NAME: &'static str = "Comment";

    fn table_name() -> &'static str {
        "comment"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "unique_id",
            "reddit_account_id",
            "post_id",
            "text",
            "created",
            "points",
            "is_reply",
            "replys",
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
            Value::from(&self.unique_id),
            Value::from(self.reddit_account_id),
            Value::from(self.post_id),
            Value::from(&self.text),
            Value::from(self.created),
            Value::from(self.points),
            Value::from(self.is_reply),
            Value::from(self.replys),
        ]
    }

    fn named_queries() -> &'static [NamedQuery] {
        &QUERIES
    }
}
