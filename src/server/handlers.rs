use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Connectivity check used by the front-end shell; accepts any payload and
/// acknowledges with an empty 200.
pub async fn test() -> StatusCode {
    StatusCode::OK
}

/// Placeholder route. The original left it without a response; answering 501
/// keeps the surface defined without inventing a contract for it.
pub async fn create_user() -> impl IntoResponse {
    stub_response("createUser")
}

/// Placeholder route, same treatment as `create_user`.
pub async fn login() -> impl IntoResponse {
    stub_response("login")
}

fn stub_response(route: &str) -> (StatusCode, Json<ErrorResponse>) {
    tracing::warn!(route, "Stub route called");
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(ErrorResponse {
            error: format!("{} is not implemented", route),
        }),
    )
}
