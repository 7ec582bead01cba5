use crate::models::reddit_account::{self, RedditAccount};
use chrono::{DateTime, Utc};
use ra_data::{DataAccess, DataError, QueryParams};
use std::future::Future;

pub trait RedditAccountDal: DataAccess<RedditAccount> {
    fn find_by_name(&self, name: &str) -> impl Future<Output = Result<Option<RedditAccount>, DataError>> + Send {
        self.find_result(reddit_account::FIND_BY_NAME, QueryParams::new().bind("name", name))
    }

    fn find_by_link_points(
        &self,
        link_points: i32,
    ) -> impl Future<Output = Result<Vec<RedditAccount>, DataError>> + Send {
        self.find_results(
            reddit_account::FIND_BY_LINK_POINTS,
            QueryParams::new().bind("linkPoints", link_points),
        )
    }

    fn find_by_comment_points(
        &self,
        comment_points: i32,
    ) -> impl Future<Output = Result<Vec<RedditAccount>, DataError>> + Send {
        self.find_results(
            reddit_account::FIND_BY_COMMENT_POINTS,
            QueryParams::new().bind("commentPoints", comment_points),
        )
    }

    fn find_by_created(
        &self,
        created: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<RedditAccount>, DataError>> + Send {
        self.find_results(
            reddit_account::FIND_BY_CREATED,
            QueryParams::new().bind("created", created),
        )
    }
}

impl<D: DataAccess<RedditAccount>> RedditAccountDal for D {}
