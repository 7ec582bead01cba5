//! Persisted RedditAnalytic entities and the named queries declared with them.

pub mod comment;
pub mod post;
pub mod reddit_account;
pub mod subreddit;

pub use comment::Comment;
pub use post::Post;
pub use reddit_account::RedditAccount;
pub use subreddit::Subreddit;
