//! Router configuration for the API.
//!
//! Centralized route registration and middleware configuration.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Route paths live at the root (no `/api` prefix) to match the established
/// frontend contract. Middleware is applied in reverse order of declaration,
/// so request IDs exist before the logging layer reads them.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::guests::guest_routes())
        .merge(handlers::bookings::booking_routes())
        .merge(handlers::staff::staff_routes())
        .merge(handlers::health::health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
