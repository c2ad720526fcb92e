use std::collections::HashSet;
use std::sync::Arc;

use axum::{http::StatusCode, Router};
use axum_test::{TestServer, TestServerConfig};
use serde_json::{json, Value};

use moviemind_api::{
    config::Config,
    contract::{self, build_url, FavoriteStatus},
    db::{MemoryStorage, Storage},
    routes::{create_router, AppState},
};

async fn create_test_app() -> Router {
    let storage = MemoryStorage::new();
    storage.seed_catalog().await.unwrap();
    create_router(AppState::new(Arc::new(storage)), &Config::default())
}

fn client(app: Router) -> TestServer {
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, config).unwrap()
}

async fn create_test_server() -> TestServer {
    client(create_test_app().await)
}

fn favorite_url(movie_id: i32) -> String {
    build_url(contract::TOGGLE_FAVORITE, &[("movieId", movie_id.to_string())])
}

fn movie_url(id: &str) -> String {
    build_url(contract::MOVIE, &[("id", id.to_string())])
}

async fn register(server: &TestServer, username: &str, password: &str) -> Value {
    let response = server
        .post(contract::REGISTER)
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server().await;
    let response = server.get(contract::HEALTH).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_end_to_end_favorites_flow() {
    let server = create_test_server().await;

    let created = register(&server, "alice", "pw123").await;
    assert_eq!(created["username"], "alice");
    assert!(created.get("password").is_none());

    let response = server
        .post(contract::LOGIN)
        .json(&json!({ "username": "alice", "password": "pw123" }))
        .await;
    response.assert_status_ok();
    let user: Value = response.json();
    assert_eq!(user["id"], created["id"]);

    let response = server.get(contract::MOVIES).await;
    response.assert_status_ok();
    let movies: Vec<Value> = response.json();
    assert_eq!(movies.len(), 5);
    assert!(movies.iter().any(|m| m["title"] == "Inception"));

    let response = server.post(&favorite_url(1)).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<FavoriteStatus>(),
        FavoriteStatus { is_favorite: true }
    );

    let favorites: Vec<Value> = server.get(contract::FAVORITES).await.json();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"], 1);

    let response = server.post(&favorite_url(1)).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<FavoriteStatus>(),
        FavoriteStatus { is_favorite: false }
    );

    let favorites: Vec<Value> = server.get(contract::FAVORITES).await.json();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_favorites_require_authentication() {
    let server = create_test_server().await;

    server
        .get(contract::FAVORITES)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .post(&favorite_url(1))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .get(contract::CURRENT_USER)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .post(contract::LOGOUT)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_toggle_unknown_movie_returns_404() {
    let server = create_test_server().await;
    register(&server, "alice", "pw123").await;

    let response = server.post(&favorite_url(999)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Movie not found");

    let favorites: Vec<Value> = server.get(contract::FAVORITES).await.json();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_get_movie() {
    let server = create_test_server().await;

    let response = server.get(&movie_url("1")).await;
    response.assert_status_ok();
    let movie: Value = response.json();
    assert_eq!(movie["title"], "Inception");
    assert_eq!(movie["releaseYear"], 2010);
    assert_eq!(movie["rating"], 88);

    let response = server.get(&movie_url("42")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "message": "Movie not found" }));

    server
        .get(&movie_url("abc"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommendations_are_distinct_catalog_members() {
    let server = create_test_server().await;
    let catalog: Vec<Value> = server.get(contract::MOVIES).await.json();

    for _ in 0..10 {
        let response = server.get(contract::RECOMMENDATIONS).await;
        response.assert_status_ok();
        let picked: Vec<Value> = response.json();

        assert_eq!(picked.len(), 3);
        let ids: HashSet<i64> = picked.iter().filter_map(|m| m["id"].as_i64()).collect();
        assert_eq!(ids.len(), 3);
        assert!(picked.iter().all(|m| catalog.contains(m)));
    }
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let server = create_test_server().await;
    register(&server, "alice", "pw123").await;

    let response = server
        .post(contract::REGISTER)
        .json(&json!({ "username": "alice", "password": "other" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["message"], "Username already exists");
}

#[tokio::test]
async fn test_register_validates_payload() {
    let server = create_test_server().await;

    let response = server
        .post(contract::REGISTER)
        .json(&json!({ "username": "", "password": "pw123" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "username");

    let response = server
        .post(contract::REGISTER)
        .json(&json!({ "username": "alice" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let server = create_test_server().await;
    register(&server, "alice", "pw123").await;
    server.post(contract::LOGOUT).await.assert_status_ok();

    let response = server
        .post(contract::LOGIN)
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid username or password");

    server
        .post(contract::LOGIN)
        .json(&json!({ "username": "nobody", "password": "pw123" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .get(contract::CURRENT_USER)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_and_logout() {
    let server = create_test_server().await;
    let created = register(&server, "alice", "pw123").await;

    let response = server.get(contract::CURRENT_USER).await;
    response.assert_status_ok();
    let me: Value = response.json();
    assert_eq!(me["id"], created["id"]);
    assert_eq!(me["username"], "alice");

    server.post(contract::LOGOUT).await.assert_status_ok();

    server
        .get(contract::CURRENT_USER)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_favorites_are_per_user() {
    let app = create_test_app().await;
    let alice = client(app.clone());
    let bob = client(app);

    register(&alice, "alice", "pw123").await;
    register(&bob, "bob", "hunter2").await;

    alice.post(&favorite_url(2)).await.assert_status_ok();
    let response = bob.post(&favorite_url(2)).await;
    assert_eq!(
        response.json::<FavoriteStatus>(),
        FavoriteStatus { is_favorite: true }
    );

    let alice_favorites: Vec<Value> = alice.get(contract::FAVORITES).await.json();
    let bob_favorites: Vec<Value> = bob.get(contract::FAVORITES).await.json();
    assert_eq!(alice_favorites.len(), 1);
    assert_eq!(bob_favorites.len(), 1);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let server = create_test_server().await;
    let response = server.get("/api/does-not-exist").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "message": "Route not found" }));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = create_test_server().await;
    let response = server.get(contract::MOVIES).await;
    let request_id = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}
