//! Responses for requests that do not match a route or a method.

use axum::{http::StatusCode, response::Response};

use crate::Alert;

/// Fallback for paths that match no route.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// A JSON 404 response for an unknown route.
pub fn get_404_not_found_response() -> Response {
    Alert::Error("The requested resource could not be found".to_owned())
        .into_response_with_status(StatusCode::NOT_FOUND)
}

/// Fallback for a known path requested with a method it does not support.
pub async fn method_not_allowed() -> Response {
    Alert::Error("Method not allowed".to_owned())
        .into_response_with_status(StatusCode::METHOD_NOT_ALLOWED)
}
