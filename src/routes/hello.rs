use axum::Json;
use serde::Serialize;

/// Message returned by `GET /api/hello`.
pub const GREETING: &str = "Hello from Go backend!";

/// The single value this service produces. Constructed fresh for every
/// request and serialized immediately.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: String,
}

/// Handler for `GET /api/hello`.
pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING.to_string(),
    })
}
