use crate::dal::SubredditDal;
use crate::error::LogicError;
use crate::generic::GenericLogic;
use crate::models::Subreddit;
use crate::schema::{EntitySchema, FieldSpec, Record};
use garde::Validate;
use ra_data::{DataAccess, Value};
use ra_data_sqlx::SqlxDal;
use sqlx::SqlitePool;
use std::ops::Deref;

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const URL: &str = "url";
pub const SUBSCRIBERS: &str = "subscribers";

pub const NAME_MAX: usize = 100;
pub const URL_MAX: usize = 255;

static FIELDS: [FieldSpec<Subreddit>; 4] = [
    FieldSpec::id(|s: &Subreddit| Value::from(s.id)),
    FieldSpec::text(NAME, "Name", NAME_MAX, |s: &Subreddit| Value::from(&s.name)),
    FieldSpec::text(URL, "URL", URL_MAX, |s: &Subreddit| Value::from(&s.url)),
    FieldSpec::integer(SUBSCRIBERS, "Subscribers", 45, |s: &Subreddit| Value::from(s.subscribers)),
];

/// Domain rules applied once the raw values have been converted.
#[derive(Debug, Validate)]
struct SubredditDraft {
    #[garde(length(chars, min = 1, max = 100))]
    name: String,
    #[garde(length(chars, max = 255), custom(http_url))]
    url: String,
    #[garde(range(min = 0))]
    subscribers: i32,
}

// Scheme match ignores case and surrounding whitespace; the value is stored as given.
fn http_url(value: &str, _: &()) -> garde::Result {
    let scheme = value.trim().to_ascii_lowercase();
    if scheme.starts_with("http://") || scheme.starts_with("https://") {
        Ok(())
    } else {
        Err(garde::Error::new("must start with http:// or https://"))
    }
}

impl EntitySchema for Subreddit {
    fn fields() -> &'static [FieldSpec<Self>] {
        &FIELDS
    }

    fn from_record(mut record: Record) -> Result<Self, LogicError> {
        let draft = SubredditDraft {
            name: record.text(NAME)?,
            url: record.text(URL)?,
            subscribers: record.int(SUBSCRIBERS)?,
        };
        draft.validate()?;
        Ok(Subreddit {
            id: record.id,
            name: draft.name,
            url: draft.url,
            subscribers: draft.subscribers,
        })
    }
}

/// Logic for subreddits.
pub struct SubredditLogic<D = SqlxDal<Subreddit>> {
    base: GenericLogic<Subreddit, D>,
}

impl SubredditLogic {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_dal(SqlxDal::new(pool))
    }
}

impl<D: DataAccess<Subreddit>> SubredditLogic<D> {
    pub fn with_dal(dal: D) -> Self {
        Self {
            base: GenericLogic::new(dal),
        }
    }

    pub async fn get_with_name(&self, name: &str) -> Result<Option<Subreddit>, LogicError> {
        self.get(self.dal().find_by_name(name)).await
    }

    pub async fn get_with_url(&self, url: &str) -> Result<Option<Subreddit>, LogicError> {
        self.get(self.dal().find_by_url(url)).await
    }

    pub async fn get_with_subscribers(&self, subscribers: i32) -> Result<Vec<Subreddit>, LogicError> {
        self.get(self.dal().find_by_subscribers(subscribers)).await
    }
}

impl<D> Deref for SubredditLogic<D> {
    type Target = GenericLogic<Subreddit, D>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url_rule() {
        assert!(http_url("http://x", &()).is_ok());
        assert!(http_url("https://x", &()).is_ok());
        assert!(http_url("ftp://x", &()).is_err());
        assert!(http_url("HTTPS://Example.com", &()).is_ok());
        assert!(http_url(" http://x", &()).is_ok());
        assert!(http_url("Ftp://x", &()).is_err());
    }

    #[test]
    fn test_negative_subscribers_rejected() {
        let mut record = Record::new();
        record.insert(NAME, Value::from("rust"));
        record.insert(URL, Value::from("https://reddit.com/r/rust"));
        record.insert(SUBSCRIBERS, Value::from(-1));
        let err = Subreddit::from_record(record).unwrap_err();
        assert!(matches!(err, LogicError::Validation(msg) if msg.starts_with("subscribers")));
    }
}
