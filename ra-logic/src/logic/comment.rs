use crate::dal::CommentDal;
use crate::error::LogicError;
use crate::generic::GenericLogic;
use crate::models::Comment;
use crate::schema::{EntitySchema, FieldSpec, Record};
use chrono::{DateTime, Utc};
use ra_data::{DataAccess, Value};
use ra_data_sqlx::SqlxDal;
use sqlx::SqlitePool;
use std::ops::Deref;

pub const ID: &str = "id";
pub const UNIQUE_ID: &str = "unique_id";
pub const REDDIT_ACCOUNT_ID: &str = "reddit_account_id";
pub const POST_ID: &str = "post_id";
pub const TEXT: &str = "text";
pub const CREATED: &str = "created";
pub const POINTS: &str = "points";
pub const IS_REPLY: &str = "is_reply";
pub const REPLYS: &str = "replys";

pub const MAX_LEN: usize = 45;

static FIELDS: [FieldSpec<Comment>; 9] = [
    FieldSpec::id(|c: &Comment| Value::from(c.id)),
    FieldSpec::text(UNIQUE_ID, "Unique ID", MAX_LEN, |c: &Comment| Value::from(&c.unique_id)),
    FieldSpec::key(REDDIT_ACCOUNT_ID, "Reddit Account", MAX_LEN, |c: &Comment| Value::from(c.reddit_account_id)),
    FieldSpec::key(POST_ID, "Post", MAX_LEN, |c: &Comment| Value::from(c.post_id)),
    FieldSpec::text(TEXT, "Text", MAX_LEN, |c: &Comment| Value::from(&c.text)),
    FieldSpec::timestamp(CREATED, "Created", MAX_LEN, |c: &Comment| Value::from(c.created)),
    FieldSpec::integer(POINTS, "Points", MAX_LEN, |c: &Comment| Value::from(c.points)),
    FieldSpec::boolean(IS_REPLY, "Is Reply", MAX_LEN, |c: &Comment| Value::from(c.is_reply)),
    FieldSpec::integer(REPLYS, "Replys", MAX_LEN, |c: &Comment| Value::from(c.replys)),
];

impl EntitySchema for Comment {
    fn fields() -> &'static [FieldSpec<Self>] {
        &FIELDS
    }

    fn from_record(mut record: Record) -> Result<Self, LogicError> {
        Ok(Comment {
            id: record.id,
            unique_id: record.text(UNIQUE_ID)?,
            reddit_account_id: record.key(REDDIT_ACCOUNT_ID)?,
            post_id: record.key(POST_ID)?,
            text: record.text(TEXT)?,
            created: record.timestamp(CREATED)?,
            points: record.int(POINTS)?,
            is_reply: record.boolean(IS_REPLY)?,
            replys: record.int(REPLYS)?,
        })
    }
}

pub struct CommentLogic<D = SqlxDal<Comment>> {
    base: GenericLogic<Comment, D>,
}

impl CommentLogic {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_dal(SqlxDal::new(pool))
    }
}

impl<D: DataAccess<Comment>> CommentLogic<D> {
    pub fn with_dal(dal: D) -> Self {
        Self {
            base: GenericLogic::new(dal),
        }
    }

    pub async fn get_with_unique_id(&self, unique_id: &str) -> Result<Option<Comment>, LogicError> {
        self.get(self.dal().find_by_unique_id(unique_id)).await
    }

    pub async fn get_with_text(&self, text: &str) -> Result<Vec<Comment>, LogicError> {
        self.get(self.dal().find_by_text(text)).await
    }

    pub async fn get_with_created(&self, created: DateTime<Utc>) -> Result<Vec<Comment>, LogicError> {
        self.get(self.dal().find_by_created(created)).await
    }

    pub async fn get_with_points(&self, points: i32) -> Result<Vec<Comment>, LogicError> {
        self.get(self.dal().find_by_points(points)).await
    }

    pub async fn get_with_replys(&self, replys: i32) -> Result<Vec<Comment>, LogicError> {
        self.get(self.dal().find_by_replys(replys)).await
    }

    pub async fn get_with_is_reply(&self, is_reply: bool) -> Result<Vec<Comment>, LogicError> {
        self.get(self.dal().find_by_is_reply(is_reply)).await
    }

    pub async fn get_with_author(&self, reddit_account_id: i64) -> Result<Vec<Comment>, LogicError> {
        self.get(self.dal().find_by_author(reddit_account_id)).await
    }

    pub async fn get_with_post(&self, post_id: i64) -> Result<Vec<Comment>, LogicError> {
        self.get(self.dal().find_by_post(post_id)).await
    }
}

impl<D> Deref for CommentLogic<D> {
    type Target = GenericLogic<Comment, D>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
