//! Integration tests for the users and posts endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use community_backend::config::Config;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_url = "sqlite::memory:".to_string();
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;

    let state = community_backend::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    community_backend::api::router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn register(
    app: &Router,
    email: &str,
    password: &str,
    username: &str,
) -> (StatusCode, serde_json::Value) {
    send(
        app,
        post_json(
            "/api/users/register",
            serde_json::json!({ "email": email, "password": password, "username": username }),
        ),
    )
    .await
}

#[tokio::test]
async fn test_register_returns_user_without_password() {
    let app = spawn_app().await;

    let (status, body) = register(&app, "a@x.com", "pw1", "alice").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["email"], "a@x.com");
    assert!(body["data"]["createdAt"].is_string());
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_bad_request() {
    let app = spawn_app().await;

    let (status, _) = register(&app, "a@x.com", "pw1", "alice").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = register(&app, "a@x.com", "pw2", "bob").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Email is already registered");

    let (status, body) = send(&app, get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "alice");
}

#[tokio::test]
async fn test_register_requires_fields() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        post_json("/api/users/register", serde_json::json!({ "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn test_list_and_get_users() {
    let app = spawn_app().await;

    let (_, alice) = register(&app, "a@x.com", "pw", "alice").await;
    let (_, bob) = register(&app, "b@x.com", "pw", "bob").await;

    let (status, body) = send(&app, get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.contains(&alice["data"]));
    assert!(users.contains(&bob["data"]));

    let id = alice["data"]["id"].as_i64().unwrap();
    let (status, body) = send(&app, get(&format!("/api/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], alice["data"]);

    let (status, body) = send(&app, get("/api/users/by-username/bob")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], bob["data"]);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = send(&app, get("/api/users/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, get("/api/users/by-username/nobody")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for id in ["0", "-5"] {
        let (status, body) = send(&app, get(&format!("/api/users/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], format!("User {id} not found"));
    }
}

#[tokio::test]
async fn test_ids_beyond_32_bits_are_not_found() {
    let app = spawn_app().await;
    register(&app, "a@x.com", "pw", "alice").await;

    let (status, body) = send(&app, get("/api/users/3000000000")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "User 3000000000 not found");

    let (status, body) = send(
        &app,
        post_json(
            "/api/posts",
            serde_json::json!({ "title": "t", "content": "c", "authorId": 3_000_000_000_i64 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Author 3000000000 not found");
}

#[tokio::test]
async fn test_create_and_list_posts() {
    let app = spawn_app().await;

    let (_, alice) = register(&app, "a@x.com", "pw", "alice").await;
    let author_id = alice["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        post_json(
            "/api/posts",
            serde_json::json!({ "title": "First", "content": "Hello", "authorId": author_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let post = body["data"].clone();
    assert!(post["id"].as_i64().unwrap() > 0);
    assert_eq!(post["title"], "First");
    assert_eq!(post["author"], alice["data"]);

    let (status, body) = send(&app, get("/api/posts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([post]));
}

#[tokio::test]
async fn test_post_with_unknown_author_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/posts",
            serde_json::json!({ "title": "Orphan", "content": "Nobody", "authorId": 42 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Author 42 not found");

    let (status, body) = send(
        &app,
        post_json(
            "/api/posts",
            serde_json::json!({ "title": "Orphan", "content": "Nobody", "authorId": -1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Author -1 not found");

    let (_, body) = send(&app, get("/api/posts")).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_post_requires_author_id() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        post_json("/api/posts", serde_json::json!({ "title": "t", "content": "c" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "authorId is required");
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let (status, body) = send(&app, get("/api/system/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], "ok");
}
