//! HTTP handlers for the server.

pub mod counseling;
pub mod label;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Generate success response JSON.
fn success_response(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": message })),
    )
        .into_response()
}

/// Generate error response JSON.
fn error_response(error_msg: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": error_msg })),
    )
        .into_response()
}
