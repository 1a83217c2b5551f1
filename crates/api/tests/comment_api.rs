//! HTTP-level integration tests for posting and listing comments.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, seeded_app};
use serde_json::json;

#[tokio::test]
async fn post_comment_returns_201_and_appends() {
    let (_, app) = seeded_app();
    let body = json!({ "trackId": "1", "author": "Anonymous", "text": "Great track!" });
    let response = post_json(app.clone(), "/comment", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["trackId"], "1");
    assert_eq!(json["author"], "Anonymous");
    assert_eq!(json["text"], "Great track!");
    assert!(json["id"].is_string());
    assert!(json["timestamp"].is_string());

    let track = body_json(get(app, "/catalog/1").await).await;
    let comments = track["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "Great track!");
}

#[tokio::test]
async fn numeric_track_id_is_accepted() {
    let (_, app) = seeded_app();
    let body = json!({ "trackId": 2, "author": "Ann", "text": "Classic" });
    let response = post_json(app, "/comment", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn comments_list_in_insertion_order() {
    let (_, app) = seeded_app();
    for text in ["first", "second", "third"] {
        let body = json!({ "trackId": "4", "author": "Ann", "text": text });
        post_json(app.clone(), "/comment", body).await;
    }

    let response = get(app, "/catalog/4/comments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let texts: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[tokio::test]
async fn blank_text_is_rejected_and_not_appended() {
    let (_, app) = seeded_app();
    let body = json!({ "trackId": "1", "author": "Anonymous", "text": "   " });
    let response = post_json(app.clone(), "/comment", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_FIELD");

    let track = body_json(get(app, "/catalog/1").await).await;
    assert!(track["comments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_author_is_rejected() {
    let (_, app) = seeded_app();
    let response = post_json(app, "/comment", json!({ "trackId": "1", "text": "hi" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Missing required field: author"
    );
}

#[tokio::test]
async fn unknown_track_is_404() {
    let (_, app) = seeded_app();
    let body = json!({ "trackId": "99", "author": "Ann", "text": "hello?" });
    let response = post_json(app, "/comment", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_comments_of_unknown_track_is_404() {
    let (_, app) = seeded_app();
    let response = get(app, "/catalog/99/comments").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
