use crate::models::subreddit::{self, Subreddit};
use ra_data::{DataAccess, DataError, QueryParams};
use std::future::Future;

pub trait SubredditDal: DataAccess<Subreddit> {
    fn find_by_name(&self, name: &str) -> impl Future<Output = Result<Option<Subreddit>, DataError>> + Send {
        self.find_result(subreddit::FIND_BY_NAME, QueryParams::new().bind("name", name))
    }

    fn find_by_url(&self, url: &str) -> impl Future<Output = Result<Option<Subreddit>, DataError>> + Send {
        self.find_result(subreddit::FIND_BY_URL, QueryParams::new().bind("url", url))
    }

    fn find_by_subscribers(
        &self,
        subscribers: i32,
    ) -> impl Future<Output = Result<Vec<Subreddit>, DataError>> + Send {
        self.find_results(
            subreddit::FIND_BY_SUBSCRIBERS,
            QueryParams::new().bind("subscribers", subscribers),
        )
    }
}

impl<D: DataAccess<Subreddit>> SubredditDal for D {}
