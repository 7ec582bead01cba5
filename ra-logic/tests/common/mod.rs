#![allow(dead_code)]

use ra_data::parse_timestamp;
use ra_data_sqlx::connect;
use ra_logic::{migrate, ParameterMap, RedditAccount, RedditAccountLogic, Subreddit, SubredditLogic};
use sqlx::SqlitePool;

pub const CREATED: &str = "Sat Oct 17 14:03:09 UTC 2026";

/// A fresh in-memory store with the schema applied.
pub async fn setup() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    migrate(&pool).await.unwrap();
    pool
}

pub fn params(pairs: &[(&str, &str)]) -> ParameterMap {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

pub async fn seed_subreddit(pool: &SqlitePool, name: &str) -> Subreddit {
    let logic = SubredditLogic::new(pool.clone());
    let url = format!("https://reddit.com/r/{name}");
    let draft = logic
        .create_entity(&params(&[("name", name), ("url", url.as_str()), ("subscribers", "10")]))
        .unwrap();
    logic.add(&draft).await.unwrap()
}

pub async fn seed_account(pool: &SqlitePool, name: &str) -> RedditAccount {
    let logic = RedditAccountLogic::new(pool.clone());
    let account = RedditAccount {
        id: None,
        name: name.into(),
        created: parse_timestamp(CREATED).unwrap(),
        link_points: 1,
        comment_points: 2,
    };
    logic.add(&account).await.unwrap()
}
