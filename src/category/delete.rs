//! Category deletion endpoint.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Alert, Error,
    category::{CategoryService, extract::parse_category_id},
};

/// The confirmation sent after a category is deleted.
pub const DELETED_MESSAGE: &str = "Category Deleted Successfully";

/// Handle `DELETE /categories/{category_id}`.
pub async fn delete_category_endpoint(
    Path(raw_id): Path<String>,
    State(service): State<CategoryService>,
) -> Response {
    let category_id = match parse_category_id(&raw_id) {
        Ok(category_id) => category_id,
        Err(error) => return error.into_response(),
    };

    match service.delete(category_id) {
        Ok(true) => {
            tracing::info!("Deleted category {category_id}");
            Alert::Message(DELETED_MESSAGE.to_owned()).into_response()
        }
        Ok(false) => Error::NotFound.into_response(),
        Err(error) => error.into_response(),
    }
}
