//! Category update endpoint.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{
        CategoryPayload, CategoryService,
        extract::{decode_payload, parse_category_id},
    },
};

/// Handle `PUT /categories/{category_id}`.
///
/// The name and description are replaced; the ID always comes from the path.
pub async fn update_category_endpoint(
    Path(raw_id): Path<String>,
    State(service): State<CategoryService>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> Response {
    let category_id = match parse_category_id(&raw_id) {
        Ok(category_id) => category_id,
        Err(error) => return error.into_response(),
    };

    let payload = match decode_payload(payload) {
        Ok(payload) => payload,
        Err(error) => return error.into_response(),
    };

    match service.update(category_id, payload) {
        Ok(Some(category)) => {
            tracing::info!("Updated category {category_id}");
            Json(category).into_response()
        }
        Ok(None) => Error::NotFound.into_response(),
        Err(error) => error.into_response(),
    }
}
