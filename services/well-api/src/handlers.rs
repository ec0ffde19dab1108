//! HTTP handlers for the well query API.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use well_common::{validate_polygon, wells_within, WellError};

use crate::state::AppState;

/// Query parameters for the lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct WellQueryParams {
    pub api: Option<String>,
}

/// JSON body of the containment query: `{"polygon": [[x1,y1],[x2,y2],...]}`.
///
/// Vertex pairs are consumed in the axis order supplied here; stored points
/// are tested as (latitude, longitude). See `well_common::spatial`.
#[derive(Debug, Deserialize)]
pub struct PolygonRequest {
    pub polygon: Vec<(f64, f64)>,
}

/// GET /health
pub async fn health() -> Response {
    Json(json!({
        "status": "ok",
        "service": "well-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

/// GET /well?api=<id>
pub async fn get_well(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<WellQueryParams>,
) -> Response {
    let api = match params.api.as_deref().map(str::trim) {
        Some(api) if !api.is_empty() => api.to_string(),
        _ => return well_error(WellError::MissingParameter("api".to_string())),
    };

    match state.store.get_by_api(&api).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Well API not found".to_string()),
        Err(e) => well_error(e),
    }
}

/// GET /polygon with a JSON polygon body.
///
/// Evaluates every stored coordinate row against the polygon: a full scan,
/// accepted at the dataset's scale in place of a spatial index.
pub async fn wells_in_polygon(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<PolygonRequest>,
) -> Response {
    if let Err(e) = validate_polygon(&request.polygon) {
        return well_error(e);
    }

    match state.store.all_coordinates().await {
        Ok(rows) => Json(wells_within(&request.polygon, &rows)).into_response(),
        Err(e) => well_error(e),
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

/// Map a [`WellError`] onto the wire: status from the shared taxonomy,
/// message from its Display impl. Server-side faults get logged here.
fn well_error(e: WellError) -> Response {
    let status = StatusCode::from_u16(e.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %e, "Request failed");
    }
    error_response(status, e.to_string())
}
