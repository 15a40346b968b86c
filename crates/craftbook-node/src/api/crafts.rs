//! Craft query endpoints.
//!
//! Results borrow from the catalog, so each handler serializes its response
//! before returning.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::state::AppState;

/// Request body for material matching.
#[derive(Debug, Deserialize)]
pub struct MaterialsRequest {
    #[serde(default)]
    pub materials: Vec<String>,
}

/// Request body for time estimation.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    #[serde(default)]
    pub ids: Vec<String>,
}

/// List all crafts.
pub async fn list_crafts(State(state): State<AppState>) -> Response {
    Json(state.engine.list_crafts()).into_response()
}

/// Get details for one craft.
pub async fn get_craft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let details = state.engine.craft_details(&id)?;
    Ok(Json(details).into_response())
}

/// Search crafts by category.
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Response {
    Json(state.engine.find_by_category(&category)).into_response()
}

/// Search crafts by difficulty.
pub async fn by_difficulty(
    State(state): State<AppState>,
    Path(difficulty): Path<String>,
) -> Result<Response, ApiError> {
    let items = state.engine.find_by_difficulty(&difficulty)?;
    Ok(Json(items).into_response())
}

/// Find crafts that can be made from the listed materials.
pub async fn by_materials(
    State(state): State<AppState>,
    Json(req): Json<MaterialsRequest>,
) -> Response {
    Json(state.engine.find_by_materials(&req.materials)).into_response()
}

/// Suggest a random craft.
pub async fn random_craft(State(state): State<AppState>) -> Result<Response, ApiError> {
    let details = state.engine.random_details()?;
    Ok(Json(details).into_response())
}

/// Estimate total time for a list of crafts.
pub async fn estimate(
    State(state): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> Result<Response, ApiError> {
    let report = state.engine.estimate_breakdown(req.ids.as_slice())?;
    Ok(Json(report).into_response())
}
