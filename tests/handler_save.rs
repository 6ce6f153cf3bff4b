mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_save_with_alias() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://google.com", "alias": "awesome-project" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(
        json,
        json!({ "status": "OK", "alias": "awesome-project" })
    );
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[tokio::test]
async fn test_save_generates_alias() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://site.com", "alias": "" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "OK");
    assert!(json.get("error").is_none());

    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_save_without_alias_field() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://site.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["alias"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_save_empty_url() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "", "alias": "some_alias" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "field URL is a required field" })
    );
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[tokio::test]
async fn test_save_invalid_url() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    for alias in ["", "hey-hey"] {
        let response = server
            .post("/url")
            .json(&json!({ "url": "Hello world", "alias": alias }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({ "status": "Error", "error": "field URL is not a valid URL" })
        );
    }
}

#[tokio::test]
async fn test_save_duplicate_alias() {
    let pool = common::create_test_pool().await;
    common::create_test_url(&pool, "lala", "https://first.com").await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://google.com", "alias": "lala" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "failed to add url" })
    );

    // First record unchanged
    let redirect = server.get("/lala").await;
    assert_eq!(redirect.header("location"), "https://first.com");
}

#[tokio::test]
async fn test_save_unsafe_alias() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://google.com", "alias": "a/b" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "invalid alias");
}

#[tokio::test]
async fn test_save_reserved_alias() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://google.com", "alias": "health" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "invalid alias");
}

#[tokio::test]
async fn test_save_malformed_body() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/url")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "invalid request" })
    );
}

#[tokio::test]
async fn test_save_storage_failure() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());
    pool.close().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://test.com", "alias": "hello!" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "failed to add url" })
    );
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://google.com" }))
        .await;

    assert!(response.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn test_save_url_with_control_or_surrounding_whitespace() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    for url in [
        "https://google.com/a\nb",
        "https://google.com/a\tb",
        " https://google.com",
        "https://google.com ",
    ] {
        let response = server
            .post("/url")
            .json(&json!({ "url": url, "alias": "nl" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({ "status": "Error", "error": "field URL is not a valid URL" })
        );
    }

    assert_eq!(common::count_urls(&pool).await, 0);
}
