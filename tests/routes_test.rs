use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;
use user_service::{
    handlers::test_helpers::create_test_state, registry::UserStore, routes, server::create_app,
};

fn create_test_app() -> Router {
    routes::create_api_router().with_state(create_test_state())
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn create(app: &Router, name: &str, email: &str) -> Value {
    let request = post_json("/users", json!({ "name": name, "email": email }).to_string());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    body_json(response).await
}

#[tokio::test]
async fn test_health_route() {
    let app = create_test_app();

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "user-service ok" }));

    // Unaffected by earlier traffic
    create(&app, "Alice", "alice@example.com").await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(body_json(response).await, json!({ "status": "user-service ok" }));
}

#[tokio::test]
async fn test_create_and_get_user_route() {
    let app = create_test_app();

    let created = create(&app, "Alice", "alice@example.com").await;
    let user_id = created["userId"].as_str().unwrap().to_string();
    assert!(!user_id.is_empty());
    assert_eq!(
        created,
        json!({ "userId": user_id, "name": "Alice", "email": "alice@example.com" })
    );

    let response = app
        .clone()
        .oneshot(get(&format!("/users/{}", user_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_repeated_get_is_stable() {
    let app = create_test_app();
    let created = create(&app, "Bob", "bob@example.com").await;
    let uri = format!("/users/{}", created["userId"].as_str().unwrap());

    let first = body_json(app.clone().oneshot(get(&uri)).await.unwrap()).await;
    let second = body_json(app.clone().oneshot(get(&uri)).await.unwrap()).await;
    assert_eq!(first, second);
    assert_eq!(first, created);
}

#[tokio::test]
async fn test_duplicate_input_gets_distinct_ids() {
    let app = create_test_app();

    let first = create(&app, "Carol", "carol@example.com").await;
    let second = create(&app, "Carol", "carol@example.com").await;
    assert_ne!(first["userId"], second["userId"]);

    for created in [first, second] {
        let uri = format!("/users/{}", created["userId"].as_str().unwrap());
        let fetched = body_json(app.clone().oneshot(get(&uri)).await.unwrap()).await;
        assert_eq!(fetched, created);
    }
}

#[tokio::test]
async fn test_unknown_user_route() {
    let app = create_test_app();

    let response = app.oneshot(get("/users/nonexistent-id")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_get_user_with_undecodable_id() {
    let app = create_test_app();

    let response = app.oneshot(get("/users/%FF")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("user_id"));
}

#[tokio::test]
async fn test_create_user_missing_field() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/users", json!({ "name": "Dave" }).to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_create_user_wrong_field_type() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json(
            "/users",
            json!({ "name": "Erin", "email": 42 }).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_create_user_invalid_json() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/users", "{\"name\": \"Frank\","))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_create_user_without_content_type() {
    let app = create_test_app();

    let request = Request::builder()
        .uri("/users")
        .method("POST")
        .body(Body::from(
            json!({ "name": "Grace", "email": "grace@example.com" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_rejected_create_stores_nothing() {
    let state = create_test_state();
    let app = routes::create_api_router().with_state(state.clone());

    let response = app
        .oneshot(post_json("/users", json!({ "email": "x@example.com" }).to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.users.user_count().await, 0);
}

#[tokio::test]
async fn test_isolated_apps_do_not_share_users() {
    let left = create_test_app();
    let right = create_test_app();

    let created = create(&left, "Heidi", "heidi@example.com").await;
    let uri = format!("/users/{}", created["userId"].as_str().unwrap());

    let response = right.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = create_app(create_test_state());

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert!(doc["paths"]["/health"]["get"].is_object());
    assert!(doc["paths"]["/users"]["post"].is_object());
    assert!(doc["paths"]["/users/{user_id}"]["get"].is_object());
    assert!(doc["components"]["schemas"]["User"]["properties"]["userId"].is_object());
}
