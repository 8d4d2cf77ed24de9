use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

use crate::helpers::{TestApp, TestDatabase};

#[tokio::test]
async fn empty_users_table_returns_empty_list() {
    let database = TestDatabase::with_users(&[]).await;
    let app = TestApp::spawn_app(&database).await;

    let response = app.get("/users").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()[CONTENT_TYPE].to_str().unwrap(),
        "application/json"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "users": [] }));
}

#[tokio::test]
async fn every_row_is_returned_in_table_order() {
    let database = TestDatabase::with_users(&[
        (1, "alice", None),
        (2, "bob", Some("bob@example.com")),
    ])
    .await;
    let app = TestApp::spawn_app(&database).await;

    let response = app.get("/users").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "users": [
                { "id": 1, "name": "alice", "email": null },
                { "id": 2, "name": "bob", "email": "bob@example.com" },
            ]
        })
    );
}

#[tokio::test]
async fn query_parameters_are_ignored() {
    let database = TestDatabase::with_users(&[(1, "alice", None)]).await;
    let app = TestApp::spawn_app(&database).await;

    let response = app.get("/users?name=bob&limit=0").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn repeated_requests_return_identical_bodies() {
    let database = TestDatabase::with_users(&[(1, "alice", None), (2, "bob", None)]).await;
    let app = TestApp::spawn_app(&database).await;

    let first = app.get("/users").await.text().await.unwrap();
    let second = app.get("/users").await.text().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn unreachable_database_returns_server_error() {
    let database = TestDatabase::missing();
    let app = TestApp::spawn_app(&database).await;

    let response = app.get("/users").await;

    assert_eq!(response.status().as_u16(), 500);
    assert!(response.text().await.unwrap().is_empty());
    // The provider never creates the file it failed to open.
    assert!(!database.exists());
}

#[tokio::test]
async fn missing_users_table_returns_server_error() {
    let database = TestDatabase::without_users_table().await;
    let app = TestApp::spawn_app(&database).await;

    let response = app.get("/users").await;

    assert_eq!(response.status().as_u16(), 500);
    assert!(response.text().await.unwrap().is_empty());
}
