//! Application router configuration.

use axum::{
    Router,
    routing::{MethodRouter, get},
};

use crate::{
    AppState,
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_endpoint,
        get_category_endpoint, update_category_endpoint,
    },
    endpoints,
    health::get_health,
    not_found::{get_404_not_found, method_not_allowed},
};

/// Return a router with all the app's routes.
///
/// The category routes are served both at the root and under
/// [endpoints::API_PREFIX].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .merge(category_routes())
        .nest(endpoints::API_PREFIX, category_routes())
        .fallback(get_404_not_found)
        .with_state(state)
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            endpoints::CATEGORIES,
            with_method_fallback(get(get_categories_endpoint).post(create_category_endpoint)),
        )
        .route(
            endpoints::CATEGORY,
            with_method_fallback(
                get(get_category_endpoint)
                    .put(update_category_endpoint)
                    .delete(delete_category_endpoint),
            ),
        )
}

fn with_method_fallback(method_router: MethodRouter<AppState>) -> MethodRouter<AppState> {
    method_router.fallback(method_not_allowed)
}
