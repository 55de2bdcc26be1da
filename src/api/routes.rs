//! API route definitions

use axum::{
    Router,
    routing::get,
    http::{header, HeaderValue, Method},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers;
use crate::store::Catalog;
use crate::types::{
    Artefact, Coordinates, Exhibit, FocalPoint, LocalizedString, Museum, ObjectImage,
    ObjectImages, OpeningTime, Weekday,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Heritage API",
        version = "0.1.0",
        description = "Read-only access to museum exhibits and artefacts"
    ),
    tags(
        (name = "exhibits", description = "Public art sites and installations"),
        (name = "artefacts", description = "Catalogued museum objects"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health,
        handlers::list_exhibits,
        handlers::list_artefacts,
    ),
    components(schemas(
        Exhibit,
        Artefact,
        LocalizedString,
        Coordinates,
        Museum,
        OpeningTime,
        Weekday,
        ObjectImages,
        ObjectImage,
        FocalPoint,
    ))
)]
pub struct ApiDoc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    // Preflight
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Fixed CORS headers on every dataset response, errors included
    let datasets = Router::new()
        .route("/exhibits", get(handlers::list_exhibits))
        .route("/artefacts", get(handlers::list_artefacts))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    Router::new()
        // Health
        .route("/", get(handlers::health))

        // OpenAPI spec
        .route("/openapi.json", get(handlers::openapi))

        .merge(datasets)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
