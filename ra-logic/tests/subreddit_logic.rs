mod common;

use common::{params, setup};
use ra_data::{DataError, Value};
use ra_logic::{LogicError, ParameterMap, Subreddit, SubredditLogic};

fn valid() -> ParameterMap {
    params(&[("name", "Test"), ("url", "http://t"), ("subscribers", "100")])
}

#[tokio::test]
async fn create_entity_from_parameters() {
    let logic = SubredditLogic::new(setup().await);
    let subreddit = logic.create_entity(&valid()).unwrap();
    assert_eq!(
        subreddit,
        Subreddit {
            id: None,
            name: "Test".into(),
            url: "http://t".into(),
            subscribers: 100,
        }
    );
}

#[tokio::test]
async fn create_entity_is_side_effect_free() {
    let logic = SubredditLogic::new(setup().await);
    let first = logic.create_entity(&valid()).unwrap();
    let second = logic.create_entity(&valid()).unwrap();
    assert_eq!(first, second);
    assert!(logic.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn name_length_boundary() {
    let logic = SubredditLogic::new(setup().await);
    let mut p = valid();

    p.insert("name", ["a".repeat(100)]);
    assert_eq!(logic.create_entity(&p).unwrap().name.len(), 100);

    p.insert("name", ["a".repeat(101)]);
    let err = logic.create_entity(&p).unwrap_err();
    assert!(matches!(err, LogicError::Validation(msg) if msg == "name: string length is 101 > 100"));
}

#[tokio::test]
async fn blank_name_is_rejected_as_empty() {
    let logic = SubredditLogic::new(setup().await);
    let p = valid().with("name", ["   "]);
    let err = logic.create_entity(&p).unwrap_err();
    assert!(matches!(err, LogicError::Validation(msg) if msg == "name: value cannot be empty"));
}

#[tokio::test]
async fn subscribers_boundary() {
    let logic = SubredditLogic::new(setup().await);
    assert_eq!(
        logic.create_entity(&valid().with("subscribers", ["0"])).unwrap().subscribers,
        0
    );
    let err = logic.create_entity(&valid().with("subscribers", ["-1"])).unwrap_err();
    assert!(matches!(err, LogicError::Validation(_)));
    let err = logic.create_entity(&valid().with("subscribers", ["lots"])).unwrap_err();
    assert!(matches!(err, LogicError::Validation(_)));
}

#[tokio::test]
async fn url_rules() {
    let logic = SubredditLogic::new(setup().await);
    assert!(logic.create_entity(&valid().with("url", ["http://x"])).is_ok());
    assert!(logic.create_entity(&valid().with("url", ["https://x"])).is_ok());
    assert!(matches!(
        logic.create_entity(&valid().with("url", ["ftp://x"])),
        Err(LogicError::Validation(_))
    ));

    let longest = format!("http://{}", "a".repeat(248));
    assert!(logic.create_entity(&valid().with("url", [longest])).is_ok());
    let too_long = format!("http://{}", "a".repeat(249));
    assert!(matches!(
        logic.create_entity(&valid().with("url", [too_long])),
        Err(LogicError::Validation(_))
    ));
}

#[tokio::test]
async fn parameter_failures_are_distinguished() {
    let logic = SubredditLogic::new(setup().await);

    let mut missing = valid();
    missing.remove("url");
    assert!(matches!(logic.create_entity(&missing), Err(LogicError::MissingField(c)) if c == "url"));

    let empty = valid().with("url", Vec::<String>::new());
    assert!(matches!(logic.create_entity(&empty), Err(LogicError::EmptyValues(c)) if c == "url"));

    let mut null = valid();
    null.insert_null("url");
    assert!(matches!(logic.create_entity(&null), Err(LogicError::NullValues(c)) if c == "url"));
}

#[tokio::test]
async fn id_hint_is_parsed() {
    let logic = SubredditLogic::new(setup().await);
    assert_eq!(logic.create_entity(&valid().with("id", ["7"])).unwrap().id, Some(7));
    assert!(matches!(
        logic.create_entity(&valid().with("id", ["seven"])),
        Err(LogicError::Validation(_))
    ));
    assert!(matches!(
        logic.create_entity(&valid().with("id", [""])),
        Err(LogicError::Validation(_))
    ));
}

#[tokio::test]
async fn columns_are_aligned() {
    let logic = SubredditLogic::new(setup().await);
    let names = logic.column_names();
    let codes = logic.column_codes();
    let subreddit = Subreddit {
        id: Some(3),
        name: "rust".into(),
        url: "https://reddit.com/r/rust".into(),
        subscribers: 42,
    };
    let data = logic.extract_data_as_list(&subreddit);

    assert_eq!(names, vec!["ID", "Name", "URL", "Subscribers"]);
    assert_eq!(codes, vec!["id", "name", "url", "subscribers"]);
    assert_eq!(
        data,
        vec![
            Value::Int(3),
            Value::from("rust"),
            Value::from("https://reddit.com/r/rust"),
            Value::Int(42),
        ]
    );
}

#[tokio::test]
async fn persist_and_find() {
    let logic = SubredditLogic::new(setup().await);
    let saved = logic.add(&logic.create_entity(&valid()).unwrap()).await.unwrap();
    let id = saved.id.expect("store-assigned id");

    assert_eq!(logic.get_with_id(id).await.unwrap(), Some(saved.clone()));
    assert_eq!(logic.get_with_name("Test").await.unwrap(), Some(saved.clone()));
    assert_eq!(logic.get_with_url("http://t").await.unwrap(), Some(saved.clone()));
    assert_eq!(logic.get_with_subscribers(100).await.unwrap(), vec![saved.clone()]);
    assert!(logic.get_with_subscribers(5).await.unwrap().is_empty());
    assert_eq!(logic.get_with_name("Nope").await.unwrap(), None);
}

#[tokio::test]
async fn find_by_id_on_empty_store_is_none() {
    let logic = SubredditLogic::new(setup().await);
    assert_eq!(logic.get_with_id(999).await.unwrap(), None);
}

#[tokio::test]
async fn update_and_delete() {
    let logic = SubredditLogic::new(setup().await);
    let mut saved = logic.add(&logic.create_entity(&valid()).unwrap()).await.unwrap();
    saved.subscribers = 101;
    logic.update(&saved).await.unwrap();
    assert_eq!(logic.get_with_id(saved.id.unwrap()).await.unwrap().unwrap().subscribers, 101);

    assert!(logic.delete(&saved).await.unwrap());
    assert!(logic.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_or_delete_without_id_is_precondition() {
    let logic = SubredditLogic::new(setup().await);
    let draft = logic.create_entity(&valid()).unwrap();
    assert!(matches!(logic.update(&draft).await, Err(LogicError::Precondition(_))));
    assert!(matches!(logic.delete(&draft).await, Err(LogicError::Precondition(_))));
}

#[tokio::test]
async fn store_failures_surface_as_persistence() {
    let pool = setup().await;
    let logic = SubredditLogic::new(pool.clone());
    let draft = logic.create_entity(&valid()).unwrap();
    logic.add(&draft).await.unwrap();

    // duplicate name violates the unique constraint
    let err = logic.add(&draft).await.unwrap_err();
    assert!(matches!(err, LogicError::Persistence(DataError::Database(_))));
    assert!(!err.is_client_error());

    sqlx::query("DROP TABLE subreddit").execute(&pool).await.unwrap();
    assert!(matches!(logic.get_all().await, Err(LogicError::Persistence(_))));
}

#[tokio::test]
async fn stored_subreddit_serializes_with_its_id() {
    let logic = SubredditLogic::new(setup().await);
    let saved = logic.add(&logic.create_entity(&valid()).unwrap()).await.unwrap();
    let json = serde_json::to_value(&saved).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": saved.id, "name": "Test", "url": "http://t", "subscribers": 100})
    );
    assert!(json["id"].is_i64());
}

#[tokio::test]
async fn url_scheme_is_case_insensitive_and_kept_verbatim() {
    let logic = SubredditLogic::new(setup().await);
    let subreddit = logic
        .create_entity(&valid().with("url", ["HTTPS://Example.com"]))
        .unwrap();
    assert_eq!(subreddit.url, "HTTPS://Example.com");

    let subreddit = logic.create_entity(&valid().with("url", [" http://x"])).unwrap();
    assert_eq!(subreddit.url, " http://x");
}

#[tokio::test]
async fn blank_id_counts_as_omitted() {
    let logic = SubredditLogic::new(setup().await);
    let subreddit = logic.create_entity(&valid().with("id", [""])).unwrap();
    assert_eq!(subreddit.id, None);

    let err = logic.create_entity(&valid().with("id", ["x"])).unwrap_err();
    assert!(matches!(err, LogicError::Validation(msg) if msg.starts_with("id")));
}
