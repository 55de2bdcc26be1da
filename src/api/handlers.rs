//! API request handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use utoipa::{IntoParams, OpenApi};

use super::routes::{ApiDoc, AppState};
use crate::error::Error;
use crate::filter::{parse_id, parse_object_number, KeyFilter};
use crate::types::{Artefact, Exhibit};

// Query parameters
//
// Read as raw pairs; a repeated key keeps its first value.

type QueryPairs = Vec<(String, String)>;

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExhibitParams {
    /// Comma-separated exhibit ids; non-numeric entries are ignored
    pub ids: Option<String>,
}

impl From<QueryPairs> for ExhibitParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            ids: first_value(&pairs, "ids"),
        }
    }
}

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArtefactParams {
    /// Comma-separated object numbers, matched exactly
    #[param(rename = "objectNumbers")]
    pub object_numbers: Option<String>,
}

impl From<QueryPairs> for ArtefactParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            object_numbers: first_value(&pairs, "objectNumbers"),
        }
    }
}

/// Dataset failures surface as a plain-text 500; the details go to the log
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {:?}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

// Handlers

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health() -> &'static str {
    "Hello, world!"
}

/// List exhibits, optionally restricted to the given ids
#[utoipa::path(
    get,
    path = "/exhibits",
    params(ExhibitParams),
    responses(
        (status = 200, description = "Matching exhibits in dataset order", body = Vec<Exhibit>),
        (status = 500, description = "Dataset missing or unreadable", body = String, content_type = "text/plain")
    ),
    tag = "exhibits"
)]
pub async fn list_exhibits(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Vec<Exhibit>>, Error> {
    let params = ExhibitParams::from(pairs);
    tracing::info!("Received request: GET /exhibits ids={:?}", params.ids);

    let exhibits = state.catalog.load_exhibits().await?;
    let filter = KeyFilter::from_param(params.ids.as_deref(), parse_id);
    let exhibits = filter.apply(exhibits, |exhibit| &exhibit.id);

    tracing::debug!("Returning {} exhibits", exhibits.len());
    Ok(Json(exhibits))
}

/// List artefacts, optionally restricted to the given object numbers
#[utoipa::path(
    get,
    path = "/artefacts",
    params(ArtefactParams),
    responses(
        (status = 200, description = "Matching artefacts in dataset order", body = Vec<Artefact>),
        (status = 500, description = "Dataset missing or unreadable", body = String, content_type = "text/plain")
    ),
    tag = "artefacts"
)]
pub async fn list_artefacts(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Vec<Artefact>>, Error> {
    let params = ArtefactParams::from(pairs);
    tracing::info!(
        "Received request: GET /artefacts objectNumbers={:?}",
        params.object_numbers
    );

    let artefacts = state.catalog.load_artefacts().await?;
    let filter = KeyFilter::from_param(params.object_numbers.as_deref(), parse_object_number);
    let artefacts = filter.apply(artefacts, |artefact| &artefact.object_number);

    tracing::debug!("Returning {} artefacts", artefacts.len());
    Ok(Json(artefacts))
}

/// OpenAPI document for this service
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
