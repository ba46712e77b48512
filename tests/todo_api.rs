use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use speculoos::prelude::*;
use todo_rest::{SharedData, build_app};
use tower::ServiceExt;

/// Sends one request through the app and returns the status along with the parsed JSON body
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request_builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json_body) => request_builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string())),
        None => request_builder.body(Body::empty()),
    }
    .expect("Could not build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed to produce a response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read data from response body!");
    let parsed_body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            panic!("Response body didn't parse: {err}, received body: {bytes:?}")
        })
    };

    (status, parsed_body)
}

async fn create(app: &Router, title: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/todos",
        Some(json!({ "title": title })),
    )
    .await;
    assert_eq!(StatusCode::OK, status);
    body
}

fn new_app() -> Router {
    build_app(SharedData::default())
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = new_app();

    let (status, body) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(json!({ "status": "ok" }), body);
}

#[tokio::test]
async fn created_todos_get_consecutive_ids() {
    let app = new_app();

    let first = create(&app, "A").await;
    let second = create(&app, "B").await;

    assert_eq!(first["title"], "A");
    assert_eq!(first["completed"], false);
    assert_eq!(first["description"], Value::Null);
    assert_that!(first["created_at"].as_str()).is_some();
    assert_eq!(
        first["id"].as_i64().map(|id| id + 1),
        second["id"].as_i64()
    );
}

#[tokio::test]
async fn create_keeps_description() {
    let app = new_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/todos",
        Some(json!({ "title": "Groceries", "description": "Milk and eggs" })),
    )
    .await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(body["description"], "Milk and eggs");
}

#[tokio::test]
async fn list_returns_todos_in_creation_order() {
    let app = new_app();
    let (_, empty_list) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(json!([]), empty_list);

    create(&app, "A").await;
    create(&app, "B").await;

    let (status, body) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(StatusCode::OK, status);
    let titles: Vec<&str> = body
        .as_array()
        .expect("list response should be an array")
        .iter()
        .filter_map(|todo| todo["title"].as_str())
        .collect();
    assert_eq!(vec!["A", "B"], titles);
}

#[tokio::test]
async fn get_returns_todo_or_404() {
    let app = new_app();
    let created = create(&app, "Find me").await;

    let (status, body) = send(&app, Method::GET, "/api/todos/1", None).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(created, body);

    let (status, body) = send(&app, Method::GET, "/api/todos/9999", None).await;
    assert_eq!(StatusCode::NOT_FOUND, status);
    assert_eq!(body["error_code"], "not_found");
}

#[tokio::test]
async fn large_and_negative_ids_are_not_found() {
    let app = new_app();
    create(&app, "Only one").await;

    for uri in ["/api/todos/3000000000", "/api/todos/-1"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(StatusCode::NOT_FOUND, status, "unexpected status for {uri}");
        assert_eq!(body["error_code"], "not_found");
    }

    let (status, _) = send(&app, Method::DELETE, "/api/todos/3000000000", None).await;
    assert_eq!(StatusCode::NOT_FOUND, status);
}

#[tokio::test]
async fn toggling_twice_restores_completion() {
    let app = new_app();
    create(&app, "Flip me").await;

    let (status, once) = send(&app, Method::PUT, "/api/todos/1/toggle", None).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(once["completed"], true);

    let (_, twice) = send(&app, Method::PUT, "/api/todos/1/toggle", None).await;
    assert_eq!(twice["completed"], false);

    let (status, _) = send(&app, Method::PUT, "/api/todos/42/toggle", None).await;
    assert_eq!(StatusCode::NOT_FOUND, status);
}

#[tokio::test]
async fn update_only_changes_title_and_description() {
    let app = new_app();
    let created = create(&app, "Old title").await;
    send(&app, Method::PUT, "/api/todos/1/toggle", None).await;

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/todos/1",
        Some(json!({ "title": "New title", "description": "Now described" })),
    )
    .await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], "New title");
    assert_eq!(updated["description"], "Now described");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/todos/77",
        Some(json!({ "title": "Nobody home" })),
    )
    .await;
    assert_eq!(StatusCode::NOT_FOUND, status);
}

#[tokio::test]
async fn deleted_ids_are_gone_and_never_reused() {
    let app = new_app();
    create(&app, "A").await;
    create(&app, "B").await;

    let (status, body) = send(&app, Method::DELETE, "/api/todos/2", None).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(json!({ "message": "Todo deleted successfully" }), body);

    let (status, _) = send(&app, Method::GET, "/api/todos/2", None).await;
    assert_eq!(StatusCode::NOT_FOUND, status);
    let (status, _) = send(&app, Method::DELETE, "/api/todos/2", None).await;
    assert_eq!(StatusCode::NOT_FOUND, status);

    let (_, remaining) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(remaining.as_array().map(Vec::len), Some(1));

    let third = create(&app, "C").await;
    assert_eq!(third["id"], 3);
}

#[tokio::test]
async fn malformed_bodies_are_rejected_with_422() {
    let app = new_app();

    let (status, body) = send(&app, Method::POST, "/api/todos", Some(json!({}))).await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    assert_eq!(body["error_code"], "invalid_json");

    let (status, _) = send(&app, Method::POST, "/api/todos", Some(json!({ "title": 5 }))).await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/todos",
        Some(json!({ "title": "Untitled", "description": 3 })),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);

    let (_, listed) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(json!([]), listed);
}

#[tokio::test]
async fn malformed_update_bodies_leave_the_todo_unchanged() {
    let app = new_app();
    let created = create(&app, "Keep me").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/todos/1",
        Some(json!({ "description": "No title" })),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    assert_eq!(body["error_code"], "invalid_json");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/todos/1",
        Some(json!({ "title": ["Keep", "me"] })),
    )
    .await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    assert_eq!(body["error_code"], "invalid_json");

    let (status, stored) = send(&app, Method::GET, "/api/todos/1", None).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(created, stored);
}

#[tokio::test]
async fn empty_titles_are_accepted() {
    let app = new_app();

    let created = create(&app, "").await;
    assert_eq!(created["title"], "");

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/todos/1",
        Some(json!({ "title": "" })),
    )
    .await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(updated["title"], "");
}

#[tokio::test]
async fn non_numeric_ids_are_rejected_with_422() {
    let app = new_app();

    let (status, body) = send(&app, Method::GET, "/api/todos/abc", None).await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    assert_eq!(body["error_code"], "invalid_path");
}

#[tokio::test]
async fn cross_origin_requests_are_allowed_with_credentials() {
    let app = new_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/todos")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .expect("Could not build request");

    let response = app.oneshot(request).await.expect("Router failed to respond");
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).map(|value| value.as_bytes()),
        Some(b"http://localhost:5173".as_slice())
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).map(|value| value.as_bytes()),
        Some(b"true".as_slice())
    );
}

#[tokio::test]
async fn serves_openapi_document() {
    let app = new_app();

    let (status, body) = send(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(StatusCode::OK, status);
    assert!(body["paths"]["/api/todos/{todo_id}/toggle"]["put"].is_object());
    assert!(body["paths"]["/healthz"]["get"].is_object());
}
