//! Per-entity finders layered over the generic [`DataAccess`](ra_data::DataAccess).
//!
//! Each trait is blanket-implemented for every `DataAccess<E>` of its entity,
//! so an [`SqlxDal<Subreddit>`](ra_data_sqlx::SqlxDal) gets `find_by_name`,
//! `find_by_url` and friends for free.

pub mod comment;
pub mod post;
pub mod reddit_account;
pub mod subreddit;

pub use comment::CommentDal;
pub use post::PostDal;
pub use reddit_account::RedditAccountDal;
pub use subreddit::SubredditDal;
