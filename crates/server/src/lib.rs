pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod utils;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    doc::ApiDoc,
    routes::{health, reservation},
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Builds the application router on top of an initialized database
pub fn app(db: DatabaseConnection) -> Router {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            reservation::list_reservations,
            reservation::create_reservation
        ))
        .routes(routes!(reservation::delete_reservation))
        .routes(routes!(health::health))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(AppState { db })
}
