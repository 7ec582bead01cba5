//! Per-entity logic: field schemas, domain rules and typed getters.

pub mod comment;
pub mod post;
pub mod reddit_account;
pub mod subreddit;

pub use comment::CommentLogic;
pub use post::PostLogic;
pub use reddit_account::RedditAccountLogic;
pub use subreddit::SubredditLogic;
