//! Short JSON messages sent to the client in place of a resource.
//!
//! An alert serializes to a single-key object, either `{"message": "..."}`
//! for confirmations or `{"error": "..."}` for failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The message shown to clients when an unexpected error occurs.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str =
    "An unexpected error occurred, check the server logs for more details.";

/// A confirmation or error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    /// A confirmation that an action succeeded.
    Message(String),
    /// A description of why a request failed.
    Error(String),
}

impl Alert {
    /// Render the alert as a JSON response with `status`.
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }

    /// A generic 500 response that does not reveal the cause of the error.
    pub fn internal_server_error() -> Response {
        Alert::Error(INTERNAL_SERVER_ERROR_MESSAGE.to_owned())
            .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        let status = match self {
            Alert::Message(_) => StatusCode::OK,
            Alert::Error(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        self.into_response_with_status(status)
    }
}
