use crate::dal::RedditAccountDal;
use crate::error::LogicError;
use crate::generic::GenericLogic;
use crate::models::RedditAccount;
use crate::schema::{EntitySchema, FieldSpec, Record};
use chrono::{DateTime, Utc};
use ra_data::{DataAccess, Value};
use ra_data_sqlx::SqlxDal;
use sqlx::SqlitePool;
use std::ops::Deref;

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const CREATED: &str = "created";
pub const LINK_POINTS: &str = "link_points";
pub const COMMENT_POINTS: &str = "comment_points";

/// Upper bound on every raw value.
pub const MAX_LEN: usize = 45;

static FIELDS: [FieldSpec<RedditAccount>; 5] = [
    FieldSpec::id(|a: &RedditAccount| Value::from(a.id)),
    FieldSpec::text(NAME, "Name", MAX_LEN, |a: &RedditAccount| Value::from(&a.name)),
    FieldSpec::timestamp(CREATED, "Created", MAX_LEN, |a: &RedditAccount| Value::from(a.created)),
    FieldSpec::integer(LINK_POINTS, "Link Points", MAX_LEN, |a: &RedditAccount| {
        Value::from(a.link_points)
    }),
    FieldSpec::integer(COMMENT_POINTS, "Comment Points", MAX_LEN, |a: &RedditAccount| {
        Value::from(a.comment_points)
    }),
];

impl EntitySchema for RedditAccount {
    fn fields() -> &'static [FieldSpec<Self>] {
        &FIELDS
    }

    fn from_record(mut record: Record) -> Result<Self, LogicError> {
        Ok(RedditAccount {
            id: record.id,
            name: record.text(NAME)?,
            created: record.timestamp(CREATED)?,
            link_points: record.int(LINK_POINTS)?,
            comment_points: record.int(COMMENT_POINTS)?,
        })
    }
}

pub struct RedditAccountLogic<D = SqlxDal<RedditAccount>> {
    base: GenericLogic<RedditAccount, D>,
}

impl RedditAccountLogic {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_dal(SqlxDal::new(pool))
    }
}

impl<D: DataAccess<RedditAccount>> RedditAccountLogic<D> {
    pub fn with_dal(dal: D) -> Self {
        Self {
            base: GenericLogic::new(dal),
        }
    }

    pub async fn get_with_name(&self, name: &str) -> Result<Option<RedditAccount>, LogicError> {
        self.get(self.dal().find_by_name(name)).await
    }

    pub async fn get_with_link_points(&self, link_points: i32) -> Result<Vec<RedditAccount>, LogicError> {
        self.get(self.dal().find_by_link_points(link_points)).await
    }

    pub async fn get_with_comment_points(
        &self,
        comment_points: i32,
    ) -> Result<Vec<RedditAccount>, LogicError> {
        self.get(self.dal().find_by_comment_points(comment_points)).await
    }

    pub async fn get_with_created(&self, created: DateTime<Utc>) -> Result<Vec<RedditAccount>, LogicError> {
        self.get(self.dal().find_by_created(created)).await
    }
}

impl<D> Deref for RedditAccountLogic<D> {
    type Target = GenericLogic<RedditAccount, D>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
