mod common;

use common::{params, setup};
use ra_data::Value;
use ra_logic::{table_for, LogicError, LogicFactory, Subreddit};

#[tokio::test]
async fn resolves_with_and_without_suffix() {
    let factory = LogicFactory::with_defaults(setup().await);
    for name in ["Subreddit", "SubredditLogic"] {
        let logic = factory.get_for(name).expect("registered");
        assert_eq!(logic.entity_name(), "Subreddit");
    }
    for name in ["RedditAccount", "Post", "CommentLogic"] {
        assert!(factory.get_for(name).is_some(), "{name}");
    }
    assert_eq!(
        factory.entity_names(),
        vec!["Subreddit", "RedditAccount", "Post", "Comment"]
    );
}

#[tokio::test]
async fn unknown_name_is_none() {
    let factory = LogicFactory::with_defaults(setup().await);
    assert!(factory.get_for("Moderator").is_none());
    assert!(factory.get_for("Logic").is_none());
    assert!(factory.get_for("subreddit").is_none());
}

#[tokio::test]
async fn empty_registry_resolves_nothing() {
    let factory = LogicFactory::new(setup().await);
    assert!(factory.get_for("Subreddit").is_none());

    let factory = factory.register("Subreddit", table_for::<Subreddit>);
    assert!(factory.get_for("Subreddit").is_some());
}

#[tokio::test]
async fn submit_inserts_then_updates() {
    let factory = LogicFactory::with_defaults(setup().await);
    let logic = factory.get_for("Subreddit").unwrap();

    let row = logic
        .submit(&params(&[("name", "rust"), ("url", "https://r"), ("subscribers", "1")]))
        .await
        .unwrap();
    let id = match row[0] {
        Value::Int(id) => id,
        ref other => panic!("expected an id, got {other:?}"),
    };
    assert_eq!(row.len(), logic.column_codes().len());

    let id_text = id.to_string();
    logic
        .submit(&params(&[
            ("id", id_text.as_str()),
            ("name", "rust"),
            ("url", "https://r"),
            ("subscribers", "2"),
        ]))
        .await
        .unwrap();

    let rows = logic.rows().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][3], Value::Int(2));
    assert_eq!(logic.row_with_id(id).await.unwrap(), Some(rows[0].clone()));

    assert!(logic.delete_with_id(id).await.unwrap());
    assert!(!logic.delete_with_id(id).await.unwrap());
    assert!(logic.rows().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_reports_validation_and_missing_rows() {
    let factory = LogicFactory::with_defaults(setup().await);
    let logic = factory.get_for("Subreddit").unwrap();

    let err = logic
        .submit(&params(&[("name", "rust"), ("url", "ftp://r"), ("subscribers", "1")]))
        .await
        .unwrap_err();
    assert!(matches!(err, LogicError::Validation(_)));
    assert!(err.is_client_error());

    // update hint pointing at nothing
    let err = logic
        .submit(&params(&[
            ("id", "77"),
            ("name", "rust"),
            ("url", "https://r"),
            ("subscribers", "1"),
        ]))
        .await
        .unwrap_err();
    assert!(matches!(err, LogicError::Persistence(_)));
}
