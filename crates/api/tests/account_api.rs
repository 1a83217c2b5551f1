//! HTTP-level integration tests for registration, login, the profile view and
//! account deletion.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json, seeded_app, token_for};
use serde_json::json;

async fn register(app: axum::Router, name: &str, email: &str) -> serde_json::Value {
    let body = json!({ "name": name, "email": email, "password": "hunter2hunter2" });
    let response = post_json(app, "/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn login(app: axum::Router, email: &str) -> String {
    let body = json!({ "email": email, "password": "hunter2hunter2" });
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Login successful");
    json["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn register_returns_public_user() {
    let (_, app) = seeded_app();
    let json = register(app, "Freddie", "freddie@example.com").await;

    assert_eq!(json["message"], "User registered successfully");
    assert_eq!(json["user"]["name"], "Freddie");
    assert_eq!(json["user"]["email"], "freddie@example.com");
    assert!(json["user"]["id"].is_string());
    assert!(json["user"].get("passwordHash").is_none());
    assert!(json["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let (_, app) = seeded_app();
    register(app.clone(), "Freddie", "freddie@example.com").await;

    let body = json!({ "name": "Other", "email": "Freddie@Example.com", "password": "longenough" });
    let response = post_json(app, "/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "User already exists");
}

#[tokio::test]
async fn short_password_is_rejected() {
    let (_, app) = seeded_app();
    let body = json!({ "name": "Brian", "email": "brian@example.com", "password": "short" });
    let response = post_json(app, "/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_name_is_rejected() {
    let (_, app) = seeded_app();
    let body = json!({ "email": "roger@example.com", "password": "longenough" });
    let response = post_json(app, "/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let (_, app) = seeded_app();
    register(app.clone(), "John", "john@example.com").await;

    let body = json!({ "email": "john@example.com", "password": "wrong-password" });
    let response = post_json(app, "/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid email or password");
}

#[tokio::test]
async fn login_with_unknown_email_is_401() {
    let (_, app) = seeded_app();
    let body = json!({ "email": "nobody@example.com", "password": "whatever123" });
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn check_reports_session_state() {
    let (_, app) = seeded_app();

    let json = body_json(get(app.clone(), "/auth/check").await).await;
    assert_eq!(json["loggedIn"], false);

    let json = body_json(get_auth(app.clone(), "/auth/check", "garbage").await).await;
    assert_eq!(json["loggedIn"], false);

    register(app.clone(), "Deacon", "deacon@example.com").await;
    let token = login(app.clone(), "deacon@example.com").await;
    let json = body_json(get_auth(app, "/auth/check", &token).await).await;
    assert_eq!(json["loggedIn"], true);
}

#[tokio::test]
async fn profile_requires_a_session() {
    let (_, app) = seeded_app();
    let response = get(app, "/profile").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_lists_owned_playlists() {
    let (store, app) = seeded_app();
    register(app.clone(), "Freddie", "freddie@example.com").await;
    let token = login(app.clone(), "freddie@example.com").await;

    let created = body_json(get_auth(app.clone(), "/auth/check", &token).await).await;
    assert_eq!(created["loggedIn"], true);

    // The first registered user in a fresh store gets id 1.
    store.add_playlist(1, "Road Trip", &[1, 2]).await;
    store.add_playlist(1, "Queen Only", &[1]).await;
    store.add_playlist(1, "Empty", &[]).await;

    let response = get_auth(app, "/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile = &body_json(response).await["profile"];
    assert_eq!(profile["name"], "Freddie");
    assert_eq!(profile["followers"], 0);
    assert_eq!(profile["following"], 0);

    let playlists = profile["playlists"].as_array().unwrap();
    assert_eq!(playlists.len(), 3);

    assert_eq!(playlists[0]["title"], "Road Trip");
    assert_eq!(playlists[0]["artist"], "Various Artists");
    assert_eq!(playlists[0]["tracks"], 2);
    assert_eq!(playlists[0]["duration"], "12m");
    assert_eq!(playlists[0]["image"], "/queen.jpg");

    assert_eq!(playlists[1]["artist"], "Queen");
    assert_eq!(playlists[1]["duration"], "5m");

    assert_eq!(playlists[2]["tracks"], 0);
    assert_eq!(playlists[2]["image"], "/playlist-pic.jpg");
}

#[tokio::test]
async fn delete_account_removes_the_user() {
    let (_, app) = seeded_app();
    register(app.clone(), "Brian", "brian@example.com").await;
    let token = login(app.clone(), "brian@example.com").await;

    let response = delete_auth(app.clone(), "/account", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Account deleted successfully"
    );

    // The token still verifies but no longer resolves to a user.
    let response = get_auth(app.clone(), "/profile", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json!({ "email": "brian@example.com", "password": "hunter2hunter2" });
    let response = post_json(app.clone(), "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete_auth(app, "/account", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn token_for_unknown_user_gets_404_profile() {
    let (_, app) = seeded_app();
    let token = token_for(500, "Ghost");
    let response = get_auth(app, "/profile", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
