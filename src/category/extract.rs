//! Helpers for decoding category requests.

use axum::{Json, extract::rejection::JsonRejection};

use crate::{
    Error,
    category::{CategoryId, CategoryPayload},
};

/// Parse the `{category_id}` path segment.
///
/// # Errors
/// Returns [Error::InvalidCategoryId] if `raw_id` is not an integer.
pub fn parse_category_id(raw_id: &str) -> Result<CategoryId, Error> {
    raw_id
        .parse()
        .map_err(|_| Error::InvalidCategoryId(raw_id.to_owned()))
}

/// Unwrap a JSON request body, turning any rejection into a bad request.
///
/// Axum answers a missing content type or a body that does not match the
/// schema with 415 or 422, but clients of this API get a 400 for every
/// malformed body.
pub fn decode_payload(
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> Result<CategoryPayload, Error> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            tracing::debug!("rejected category body: {rejection}");
            Err(Error::InvalidRequestBody(rejection.body_text()))
        }
    }
}
