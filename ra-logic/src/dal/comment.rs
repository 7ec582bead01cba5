use crate::models::comment::{self, Comment};
use chrono::{DateTime, Utc};
use ra_data::{DataAccess, DataError, QueryParams};
use std::future::Future;

type Many = Result<Vec<Comment>, DataError>;

pub trait CommentDal: DataAccess<Comment> {
    fn find_by_unique_id(
        &self,
        unique_id: &str,
    ) -> impl Future<Output = Result<Option<Comment>, DataError>> + Send {
        self.find_result(comment::FIND_BY_UNIQUE_ID, QueryParams::new().bind("uniqueId", unique_id))
    }

    fn find_by_text(&self, text: &str) -> impl Future<Output = Many> + Send {
        self.find_results(comment::FIND_BY_TEXT, QueryParams::new().bind("text", text))
    }

    fn find_by_created(&self, created: DateTime<Utc>) -> impl Future<Output = Many> + Send {
        self.find_results(comment::FIND_BY_CREATED, QueryParams::new().bind("created", created))
    }

    fn find_by_points(&self, points: i32) -> impl Future<Output = Many> + Send {
        self.find_results(comment::FIND_BY_POINTS, QueryParams::new().bind("points", points))
    }

    fn find_by_replys(&self, replys: i32) -> impl Future<Output = Many> + Send {
        self.find_results(comment::FIND_BY_REPLYS, QueryParams::new().bind("replys", replys))
    }

    fn find_by_is_reply(&self, is_reply: bool) -> impl Future<Output = Many> + Send {
        self.find_results(comment::FIND_BY_IS_REPLY, QueryParams::new().bind("isReply", is_reply))
    }

    fn find_by_author(&self, reddit_account_id: i64) -> impl Future<Output = Many> + Send {
        self.find_results(
            comment::FIND_BY_AUTHOR,
            QueryParams::new().bind("redditAccountId", reddit_account_id),
        )
    }

    fn find_by_post(&self, post_id: i64) -> impl Future<Output = Many> + Send {
        self.find_results(comment::FIND_BY_POST, QueryParams::new().bind("postId", post_id))
    }
}

impl<D: DataAccess<Comment>> CommentDal for D {}
