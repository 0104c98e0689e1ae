//! Integration tests for API endpoints.
//!
//! The router is driven in-process through `tower::ServiceExt::oneshot`,
//! backed by an isolated in-memory store per test.

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_management::api::{create_router, AppState};
use user_management::domain::Credentials;
use user_management::services::Services;

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> Router {
    let credentials = Credentials::new("admin", "1234").unwrap();
    let services = Services::in_memory(credentials);
    create_router(AppState::from_services(&services))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, headers, json)
}

async fn create(app: &Router, name: &str, email: &str) -> Value {
    let (status, _, body) = send(
        app,
        Method::POST,
        "/api/users",
        Some(json!({"name": name, "email": email})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

// =============================================================================
// Root & Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_memory_backend() {
    let app = test_app();

    let (status, _, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "memory");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = test_app();

    let (status, _, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/users/{id}"].is_object());
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_login_success() {
    let app = test_app();

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"username": "admin", "password": "1234"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Login successful"}));
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = test_app();

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"username": "admin", "password": "wrong"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_field_is_bad_request() {
    let app = test_app();

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"username": "admin"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_empty_fields_are_unauthorized() {
    let app = test_app();

    for body in [
        json!({"username": "", "password": "1234"}),
        json!({"username": "admin", "password": ""}),
        json!({"username": "", "password": ""}),
    ] {
        let (status, _, body) = send(&app, Method::POST, "/api/auth/login", Some(body)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"success": false, "message": "Invalid credentials"}));
    }
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_list_users_empty() {
    let app = test_app();

    let (status, _, body) = send(&app, Method::GET, "/api/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_user_returns_location() {
    let app = test_app();

    let (status, headers, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({
            "name": "Alice",
            "email": "a@x.com",
            "phone": "555-0100",
            "employeeNumber": "E-1"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers.get(header::LOCATION).unwrap(), "/api/users/1");
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Alice",
            "email": "a@x.com",
            "phone": "555-0100",
            "employeeNumber": "E-1"
        })
    );
}

#[tokio::test]
async fn test_create_user_missing_email_is_bad_request() {
    let app = test_app();

    let (status, _, _) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"name": "Alice"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, _, list) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_user_stores_empty_values_as_given() {
    let app = test_app();

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"name": "", "email": "not-an-email"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "");
    assert_eq!(body["email"], "not-an-email");
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let app = test_app();

    let (status, _, body) = send(&app, Method::GET, "/api/users/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_add_add_delete_scenario() {
    let app = test_app();

    assert_eq!(create(&app, "Alice", "a@x.com").await["id"], 1);
    assert_eq!(create(&app, "Bob", "b@x.com").await["id"], 2);

    let (status, _, _) = send(&app, Method::DELETE, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, body) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": 2, "name": "Bob", "email": "b@x.com", "phone": null, "employeeNumber": null}])
    );

    let (status, _, _) = send(&app, Method::GET, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_echoes_body_and_persists() {
    let app = test_app();
    create(&app, "Alice", "a@x.com").await;

    let submitted = json!({
        "name": "Alice Smith",
        "email": "alice@x.com",
        "phone": "555",
        "employeeNumber": null
    });
    let (status, _, body) = send(&app, Method::PUT, "/api/users/1", Some(submitted.clone())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, submitted);

    let (_, _, stored) = send(&app, Method::GET, "/api/users/1", None).await;
    assert_eq!(stored["id"], 1);
    assert_eq!(stored["name"], "Alice Smith");
    assert_eq!(stored["phone"], "555");
    assert_eq!(stored["employeeNumber"], Value::Null);
}

#[tokio::test]
async fn test_update_ignores_body_id() {
    let app = test_app();
    create(&app, "Alice", "a@x.com").await;

    let (status, _, _) = send(
        &app,
        Method::PUT,
        "/api/users/1",
        Some(json!({"id": 50, "name": "Alice", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(&app, Method::GET, "/api/users/50", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, Method::GET, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let app = test_app();
    create(&app, "Alice", "a@x.com").await;
    let (_, _, before) = send(&app, Method::GET, "/api/users", None).await;

    let (status, _, _) = send(
        &app,
        Method::PUT,
        "/api/users/7",
        Some(json!({"name": "Ghost", "email": "g@x.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, _, after) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let app = test_app();

    let (status, _, _) = send(&app, Method::DELETE, "/api/users/3", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = test_app();

    let (status, _, _) = send(&app, Method::GET, "/api/users/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
