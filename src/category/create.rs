//! Category creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::category::{CategoryPayload, CategoryService, extract::decode_payload};

/// Handle `POST /categories`. Responds with 201 and the stored category.
pub async fn create_category_endpoint(
    State(service): State<CategoryService>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> Response {
    let payload = match decode_payload(payload) {
        Ok(payload) => payload,
        Err(error) => return error.into_response(),
    };

    match service.create(payload) {
        Ok(category) => {
            tracing::info!("Created category {}", category.id);
            (StatusCode::CREATED, Json(category)).into_response()
        }
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod create_category_endpoint_tests {
    use std::sync::Arc;

    use axum::{Json, extract::State, http::StatusCode};

    use crate::{
        Alert,
        category::{
            Category, CategoryPayload, CategoryService, InMemoryCategoryRepository,
            create_category_endpoint,
        },
        test_utils::{assert_content_type, parse_json},
    };

    fn get_test_service() -> CategoryService {
        CategoryService::new(Arc::new(
            InMemoryCategoryRepository::with_default_categories(),
        ))
    }

    #[tokio::test]
    async fn can_create_category() {
        let service = get_test_service();
        let payload = CategoryPayload {
            id: None,
            name: "Books".to_owned(),
            description: Some("Printed books".to_owned()),
        };

        let response = create_category_endpoint(State(service.clone()), Ok(Json(payload))).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_content_type(&response, "application/json");
        let category: Category = parse_json(response).await;
        assert_eq!(category.id, 3);
        assert_eq!(category.name.as_ref(), "Books");
        assert_eq!(service.get(3), Ok(Some(category)));
    }

    #[tokio::test]
    async fn client_id_is_ignored() {
        let service = get_test_service();
        let payload = CategoryPayload {
            id: Some(1),
            name: "Books".to_owned(),
            description: None,
        };

        let response = create_category_endpoint(State(service.clone()), Ok(Json(payload))).await;

        let category: Category = parse_json(response).await;
        assert_eq!(category.id, 3);
        assert_eq!(
            service.get(1).unwrap().map(|category| category.name.to_string()),
            Some("Electronics".to_owned())
        );
    }

    #[tokio::test]
    async fn empty_name_is_bad_request() {
        let service = get_test_service();
        let payload = CategoryPayload {
            id: None,
            name: "".to_owned(),
            description: Some("no name".to_owned()),
        };

        let response = create_category_endpoint(State(service.clone()), Ok(Json(payload))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let alert: Alert = parse_json(response).await;
        assert_eq!(alert, Alert::Error("Category name cannot be empty".to_owned()));
        assert_eq!(service.get_all().unwrap().len(), 2);
    }
}
