//! End-to-end tests for the greeting API.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use hello_backend::{app_router, serve, AppConfig, ServerError};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn app() -> Router {
    app_router(&AppConfig::default())
}

async fn send(app: Router, method: Method, path: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn get_hello_returns_json_greeting() {
    let response = send(app(), Method::GET, "/api/hello").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"message":"Hello from Go backend!"}"#);

    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    let message = object["message"].as_str().unwrap();
    assert!(!message.is_empty());
}

#[tokio::test]
async fn other_paths_get_default_fallback() {
    for path in ["/", "/api/other", "/api/hello/extra"] {
        let response = send(app(), Method::GET, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "path: {path}");
    }
}

#[tokio::test]
async fn post_hello_is_not_matched() {
    let response = send(app(), Method::POST, "/api/hello").await;
    assert_ne!(response.status(), StatusCode::OK);
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let mut bodies = Vec::new();
    for _ in 0..3 {
        let response = send(app(), Method::GET, "/api/hello").await;
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(response.into_body().collect().await.unwrap().to_bytes());
    }
    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn second_instance_on_same_port_fails_to_bind() {
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = occupied.local_addr().unwrap().port();

    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port,
        ..Default::default()
    };

    let err = serve(app_router(&config), &config).await.unwrap_err();
    assert!(matches!(err, ServerError::Bind(_)));
}
