use crate::models::post::{self, Post};
use chrono::{DateTime, Utc};
use ra_data::{DataAccess, DataError, QueryParams};
use std::future::Future;

type Many = Result<Vec<Post>, DataError>;

pub trait PostDal: DataAccess<Post> {
    fn find_by_unique_id(&self, unique_id: &str) -> impl Future<Output = Result<Option<Post>, DataError>> + Send {
        self.find_result(post::FIND_BY_UNIQUE_ID, QueryParams::new().bind("uniqueId", unique_id))
    }

    fn find_by_points(&self, points: i32) -> impl Future<Output = Many> + Send {
        self.find_results(post::FIND_BY_POINTS, QueryParams::new().bind("points", points))
    }

    fn find_by_comment_count(&self, comment_count: i32) -> impl Future<Output = Many> + Send {
        self.find_results(
            post::FIND_BY_COMMENT_COUNT,
            QueryParams::new().bind("commentCount", comment_count),
        )
    }

    fn find_by_title(&self, title: &str) -> impl Future<Output = Many> + Send {
        self.find_results(post::FIND_BY_TITLE, QueryParams::new().bind("title", title))
    }

    fn find_by_created(&self, created: DateTime<Utc>) -> impl Future<Output = Many> + Send {
        self.find_results(post::FIND_BY_CREATED, QueryParams::new().bind("created", created))
    }

    /// Posts written by the given reddit account.
    fn find_by_author(&self, reddit_account_id: i64) -> impl Future<Output = Many> + Send {
        self.find_results(
            post::FIND_BY_AUTHOR,
            QueryParams::new().bind("redditAccountId", reddit_account_id),
        )
    }

    fn find_by_subreddit(&self, subreddit_id: i64) -> impl Future<Output = Many> + Send {
        self.find_results(
            post::FIND_BY_SUBREDDIT,
            QueryParams::new().bind("subredditId", subreddit_id),
        )
    }
}

impl<D: DataAccess<Post>> PostDal for D {}
