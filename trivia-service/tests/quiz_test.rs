mod common;

use std::collections::HashSet;

use axum::http::{Method, StatusCode};
use serde_json::json;
use trivia_service::prelude::*;

use common::{add_question, app, send, store_with_questions};

#[tokio::test]
async fn missing_fields_are_400() {
    let app = app(store_with_questions(4).await);

    let payloads = [
        json!({"previous_questions": []}),
        json!({"quiz_category": {"id": 0, "type": "click"}}),
        json!({"quiz_category": null, "previous_questions": []}),
        json!({"quiz_category": {"type": "Science"}, "previous_questions": []}),
        json!({}),
    ];

    for payload in payloads {
        let (status, body) = send(&app, Method::POST, "/quizzes", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body["error"], 400);
    }
}

#[tokio::test]
async fn last_unseen_question_is_always_served() {
    let store = MemoryStore::seeded();
    let a = add_question(&store, "first", 2).await;
    let b = add_question(&store, "second", 2).await;
    let c = add_question(&store, "third", 2).await;
    add_question(&store, "other category", 3).await;
    let app = app(store);

    for _ in 0..20 {
        let (status, body) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({"quiz_category": {"id": 2, "type": "Art"}, "previous_questions": [a.id, b.id]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["id"], c.id);
    }
}

#[tokio::test]
async fn exhausted_pool_returns_null_question() {
    let app = app(store_with_questions(4).await);

    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": 0}, "previous_questions": [1, 2, 3, 4]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn empty_category_returns_null_question() {
    let app = app(store_with_questions(4).await);

    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": 6}, "previous_questions": []})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn full_game_serves_every_question_once() {
    let app = app(store_with_questions(7).await);
    let mut previous: Vec<i64> = Vec::new();

    loop {
        let (status, body) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({"quiz_category": {"id": 0}, "previous_questions": previous})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        match body["question"]["id"].as_i64() {
            Some(id) => {
                assert!(!previous.contains(&id));
                previous.push(id);
            }
            None => break,
        }
    }

    let served: HashSet<i64> = previous.into_iter().collect();
    assert_eq!(served, (1..=7).collect());
}

#[tokio::test]
async fn string_category_id_is_accepted() {
    let app = app(store_with_questions(8).await);

    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": "3", "type": "Geography"}, "previous_questions": []})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["category"], 3);
}
