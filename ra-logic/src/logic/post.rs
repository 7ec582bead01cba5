use crate::dal::PostDal;
use crate::error::LogicError;
use crate::generic::GenericLogic;
use crate::models::Post;
use crate::schema::{EntitySchema, FieldSpec, Record};
use chrono::{DateTime, Utc};
use ra_data::{DataAccess, Value};
use ra_data_sqlx::SqlxDal;
use sqlx::SqlitePool;
use std::ops::Deref;

pub const ID: &str = "id";
pub const REDDIT_ACCOUNT_ID: &str = "reddit_account_id";
pub const SUBREDDIT_ID: &str = "subreddit_id";
pub const UNIQUE_ID: &str = "unique_id";
pub const POINTS: &str = "points";
pub const COMMENT_COUNT: &str = "comment_count";
pub const TITLE: &str = "title";
pub const CREATED: &str = "created";

pub const MAX_LEN: usize = 45;

static FIELDS: [FieldSpec<Post>; 8] = [
    FieldSpec::id(|p: &Post| Value::from(p.id)),
    FieldSpec::key(REDDIT_ACCOUNT_ID, "Reddit Account", MAX_LEN, |p: &Post| Value::from(p.reddit_account_id)),
    FieldSpec::key(SUBREDDIT_ID, "Subreddit", MAX_LEN, |p: &Post| Value::from(p.subreddit_id)),
    FieldSpec::text(UNIQUE_ID, "Unique ID", MAX_LEN, |p: &Post| Value::from(&p.unique_id)),
    FieldSpec::integer(POINTS, "Points", MAX_LEN, |p: &Post| Value::from(p.points)),
    FieldSpec::integer(COMMENT_COUNT, "Comment Count", MAX_LEN, |p: &Post| Value::from(p.comment_count)),
    FieldSpec::text(TITLE, "Title", MAX_LEN, |p: &Post| Value::from(&p.title)),
    FieldSpec::timestamp(CREATED, "Created", MAX_LEN, |p: &Post| Value::from(p.created)),
];

impl EntitySchema for Post {
    fn fields() -> &'static [FieldSpec<Self>] {
        &FIELDS
    }

    fn from_record(mut record: Record) -> Result<Self, LogicError> {
        Ok(Post {
            id: record.id,
            reddit_account_id: record.key(REDDIT_ACCOUNT_ID)?,
            subreddit_id: record.key(SUBREDDIT_ID)?,
            unique_id: record.text(UNIQUE_ID)?,
            points: record.int(POINTS)?,
            comment_count: record.int(COMMENT_COUNT)?,
            title: record.text(TITLE)?,
            created: record.timestamp(CREATED)?,
        })
    }
}

pub struct PostLogic<D = SqlxDal<Post>> {
    base: GenericLogic<Post, D>,
}

impl PostLogic {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_dal(SqlxDal::new(pool))
    }
}

impl<D: DataAccess<Post>> PostLogic<D> {
    pub fn with_dal(dal: D) -> Self {
        Self {
            base: GenericLogic::new(dal),
        }
    }

    pub async fn get_with_unique_id(&self, unique_id: &str) -> Result<Option<Post>, LogicError> {
        self.get(self.dal().find_by_unique_id(unique_id)).await
    }

    pub async fn get_with_points(&self, points: i32) -> Result<Vec<Post>, LogicError> {
        self.get(self.dal().find_by_points(points)).await
    }

    pub async fn get_with_comment_count(&self, comment_count: i32) -> Result<Vec<Post>, LogicError> {
        self.get(self.dal().find_by_comment_count(comment_count)).await
    }

    pub async fn get_with_title(&self, title: &str) -> Result<Vec<Post>, LogicError> {
        self.get(self.dal().find_by_title(title)).await
    }

    pub async fn get_with_created(&self, created: DateTime<Utc>) -> Result<Vec<Post>, LogicError> {
        self.get(self.dal().find_by_created(created)).await
    }

    pub async fn get_with_author(&self, reddit_account_id: i64) -> Result<Vec<Post>, LogicError> {
        self.get(self.dal().find_by_author(reddit_account_id)).await
    }

    pub async fn get_with_subreddit(&self, subreddit_id: i64) -> Result<Vec<Post>, LogicError> {
        self.get(self.dal().find_by_subreddit(subreddit_id)).await
    }
}

impl<D> Deref for PostLogic<D> {
    type Target = GenericLogic<Post, D>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
