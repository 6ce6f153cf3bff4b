mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

struct Case {
    name: &'static str,
    url: &'static str,
    alias: &'static str,
    error: Option<&'static str>,
}

/// Save, redirect, delete, then redirect again for each case.
#[tokio::test]
async fn test_save_redirect_remove() {
    let cases = [
        Case {
            name: "valid url",
            url: "https://example.com/some/page",
            alias: "awesome-project",
            error: None,
        },
        Case {
            name: "empty alias",
            url: "https://site.com",
            alias: "",
            error: None,
        },
        Case {
            name: "empty url",
            url: "",
            alias: "some_alias",
            error: Some("field URL is a required field"),
        },
        Case {
            name: "invalid url with empty alias",
            url: "Hello world",
            alias: "",
            error: Some("field URL is not a valid URL"),
        },
        Case {
            name: "invalid url with correct alias",
            url: "Hello world",
            alias: "hey-hey",
            error: Some("field URL is not a valid URL"),
        },
    ];

    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    for case in cases {
        let response = server
            .post("/url")
            .json(&json!({ "url": case.url, "alias": case.alias }))
            .await;
        let body = response.json::<Value>();

        if let Some(error) = case.error {
            assert_eq!(body["status"], "Error", "{}", case.name);
            assert_eq!(body["error"], error, "{}", case.name);
            assert!(body.get("alias").is_none(), "{}", case.name);
            continue;
        }

        assert_eq!(body["status"], "OK", "{}", case.name);
        let alias = body["alias"].as_str().unwrap().to_string();
        if !case.alias.is_empty() {
            assert_eq!(alias, case.alias, "{}", case.name);
        }

        let redirect = server.get(&format!("/{alias}")).await;
        assert_eq!(redirect.status_code(), StatusCode::FOUND, "{}", case.name);
        assert_eq!(redirect.header("location"), case.url, "{}", case.name);

        let removed = server.delete(&format!("/url/{alias}")).await;
        assert_eq!(removed.status_code(), StatusCode::NO_CONTENT, "{}", case.name);

        let gone = server.get(&format!("/{alias}")).await;
        gone.assert_status_not_found();
        assert_eq!(gone.json::<Value>()["error"], "url not found", "{}", case.name);
    }
}

#[tokio::test]
async fn test_duplicate_alias_second_save_conflicts() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let first = server
        .post("/url")
        .json(&json!({ "url": "https://google.com", "alias": "duplicated" }))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/url")
        .json(&json!({ "url": "https://other.com", "alias": "duplicated" }))
        .await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    assert_eq!(second.json::<Value>()["error"], "failed to add url");

    let redirect = server.get("/duplicated").await;
    assert_eq!(redirect.header("location"), "https://google.com");
}

#[tokio::test]
async fn test_never_saved_alias_is_not_found() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let resolve = server.get("/never-saved").await;
    resolve.assert_status_not_found();
    assert_eq!(resolve.json::<Value>()["error"], "url not found");

    let delete = server.delete("/url/never-saved").await;
    delete.assert_status_not_found();
    assert_eq!(delete.json::<Value>()["error"], "url not found");
}
