//! Endpoints for reading categories.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryService, extract::parse_category_id},
};

/// Handle `GET /categories`. Responds with every category.
pub async fn get_categories_endpoint(State(service): State<CategoryService>) -> Response {
    match service.get_all() {
        Ok(categories) => Json(categories).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Handle `GET /categories/{category_id}`.
pub async fn get_category_endpoint(
    Path(raw_id): Path<String>,
    State(service): State<CategoryService>,
) -> Response {
    let category_id = match parse_category_id(&raw_id) {
        Ok(category_id) => category_id,
        Err(error) => return error.into_response(),
    };

    match service.get(category_id) {
        Ok(Some(category)) => Json(category).into_response(),
        Ok(None) => Error::NotFound.into_response(),
        Err(error) => error.into_response(),
    }
}
