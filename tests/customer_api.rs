use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use customer_service::{app, AppState, Customer, CustomerRepository, InMemoryCustomerRepository};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    repo: Arc<InMemoryCustomerRepository>,
}

fn test_app() -> TestApp {
    let repo = Arc::new(InMemoryCustomerRepository::new());
    let router = app(AppState::new(repo.clone()), 64 * 1024);
    TestApp { router, repo }
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            let payload = v.to_string();
            req = req
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, payload.len());
            Body::from(payload)
        }
        None => Body::empty(),
    };
    let resp = router.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

fn sample() -> Value {
    json!({"firstName": "A", "lastName": "B", "dateOfBirth": "2000-01-01", "active": true})
}

async fn create(router: &Router, body: Value) -> String {
    let (status, headers, bytes) = send(router, Method::POST, "/customers/v1", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(
        headers.get(header::LOCATION).unwrap().to_str().unwrap(),
        format!("/customers/v1/{}", id)
    );
    id
}

#[tokio::test]
async fn create_then_get_returns_same_fields_plus_id() {
    let app = test_app();
    let id = create(&app.router, sample()).await;
    assert!(!id.is_empty());

    let (status, _, bytes) = send(&app.router, Method::GET, &format!("/customers/v1/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let got: Value = serde_json::from_slice(&bytes).unwrap();
    let mut expected = sample();
    expected["id"] = json!(id);
    assert_eq!(got, expected);
}

#[tokio::test]
async fn created_ids_are_unique() {
    let app = test_app();
    let a = create(&app.router, sample()).await;
    let b = create(&app.router, sample()).await;
    assert_ne!(a, b);
    assert_eq!(app.repo.len().await, 2);
}

#[tokio::test]
async fn create_with_id_is_rejected_and_not_stored() {
    let app = test_app();
    let mut body = sample();
    body["id"] = json!("x");
    let (status, _, bytes) = send(&app.router, Method::POST, "/customers/v1", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(err["error"]["message"], "ID should not be part of create request");
    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn get_unknown_id_is_not_found_without_body() {
    let app = test_app();
    let (status, _, bytes) = send(&app.router, Method::GET, "/customers/v1/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn put_overwrites_every_field_and_path_id_wins() {
    let app = test_app();
    let id = create(&app.router, sample()).await;
    let other = create(&app.router, sample()).await;

    let replacement = json!({
        "id": other,
        "firstName": "C",
        "lastName": "D",
        "dateOfBirth": "1999-12-31",
        "active": false
    });
    let uri = format!("/customers/v1/{}", id);
    let (status, _, bytes) = send(&app.router, Method::PUT, &uri, Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    let stored: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(stored["id"], json!(id));

    let (_, _, bytes) = send(&app.router, Method::GET, &uri, None).await;
    let got: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        got,
        json!({"id": id, "firstName": "C", "lastName": "D", "dateOfBirth": "1999-12-31", "active": false})
    );

    let untouched = app.repo.find_by_id(&other).await.unwrap().unwrap();
    assert_eq!(untouched.first_name.as_deref(), Some("A"));
}

#[tokio::test]
async fn put_unknown_id_is_not_found_and_store_unchanged() {
    let app = test_app();
    let (status, _, _) = send(&app.router, Method::PUT, "/customers/v1/missing", Some(sample())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn delete_is_final() {
    let app = test_app();
    let id = create(&app.router, sample()).await;
    let uri = format!("/customers/v1/{}", id);

    let (status, _, bytes) = send(&app.router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());

    let (status, _, _) = send(&app.router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app.router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_leaves_others_alone() {
    let app = test_app();
    let id = create(&app.router, sample()).await;
    let (status, _, _) = send(&app.router, Method::DELETE, "/customers/v1/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let kept: Option<Customer> = app.repo.find_by_id(&id).await.unwrap();
    assert!(kept.is_some());
}

#[tokio::test]
async fn malformed_body_is_rejected_before_the_service() {
    let app = test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/customers/v1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"firstName\": "))
        .unwrap();
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn null_names_are_stored_on_create_and_put() {
    let app = test_app();
    let id = create(&app.router, json!({"firstName": null, "lastName": "B", "active": true})).await;
    let stored = app.repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.first_name, None);
    assert_eq!(stored.last_name.as_deref(), Some("B"));

    let uri = format!("/customers/v1/{}", id);
    let (status, _, bytes) = send(&app.router, Method::PUT, &uri, Some(json!({"firstName": "A", "lastName": null}))).await;
    assert_eq!(status, StatusCode::OK);
    let got: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(got["firstName"], "A");
    assert!(got["lastName"].is_null());
    let stored = app.repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.last_name, None);
}

#[tokio::test]
async fn create_with_non_string_id_is_rejected_as_client_supplied_id() {
    let app = test_app();
    let mut body = sample();
    body["id"] = json!(7);
    let (status, _, bytes) = send(&app.router, Method::POST, "/customers/v1", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(err["error"]["message"], "ID should not be part of create request");
    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn create_with_null_or_empty_id_succeeds() {
    let app = test_app();
    let mut body = sample();
    body["id"] = Value::Null;
    create(&app.router, body.clone()).await;
    body["id"] = json!("");
    create(&app.router, body).await;
    assert_eq!(app.repo.len().await, 2);
}

#[tokio::test]
async fn invalid_payload_fields_are_bad_requests() {
    let app = test_app();
    let mut body = sample();
    body["dateOfBirth"] = json!("2000-13-01");
    let (status, _, _) = send(&app.router, Method::POST, "/customers/v1", Some(body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(&app.router, Method::POST, "/customers/v1", Some(json!(["not", "an", "object"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let id = create(&app.router, sample()).await;
    let uri = format!("/customers/v1/{}", id);
    let (status, _, _) = send(&app.router, Method::PUT, &uri, Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, _, bytes) = send(&app.router, Method::GET, &uri, None).await;
    let got: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(got["dateOfBirth"], "2000-01-01");
    assert_eq!(app.repo.len().await, 1);
}

#[tokio::test]
async fn put_with_non_string_body_id_uses_path_id() {
    let app = test_app();
    let id = create(&app.router, sample()).await;
    let mut body = sample();
    body["id"] = json!(42);
    body["firstName"] = json!("Z");
    let uri = format!("/customers/v1/{}", id);
    let (status, _, bytes) = send(&app.router, Method::PUT, &uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    let got: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(got["id"], json!(id));
    assert_eq!(got["firstName"], "Z");
}

#[tokio::test]
async fn create_accepts_trailing_slash() {
    let app = test_app();
    let (status, headers, bytes) = send(&app.router, Method::POST, "/customers/v1/", Some(sample())).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    let id = created["id"].as_str().unwrap();
    assert_eq!(
        headers.get(header::LOCATION).unwrap().to_str().unwrap(),
        format!("/customers/v1/{}", id)
    );
    assert_eq!(app.repo.len().await, 1);
}

#[tokio::test]
async fn operational_routes_respond() {
    let app = test_app();
    let (status, _, bytes) = send(&app.router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap()["status"], "ok");

    let (status, _, bytes) = send(&app.router, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap()["storage"], "ok");

    let (status, _, bytes) = send(&app.router, Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap()["name"], "customer-service");

    let (status, _, bytes) = send(&app.router, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/customers/v1/{id}"].is_object());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let repo = Arc::new(InMemoryCustomerRepository::new());
    let router = app(AppState::new(repo.clone()), 16);
    let (status, _, _) = send(&router, Method::POST, "/customers/v1", Some(sample())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(repo.is_empty().await);
}
