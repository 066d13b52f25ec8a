//! JSON API handlers

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tailspin_domain::Campaign;

use super::error::ApiError;
use super::{parse_id, AppState};

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub campaigns: usize,
}

pub async fn list_campaigns(State(state): State<AppState>) -> Json<Vec<Campaign>> {
    Json(state.catalog.list())
}

pub async fn get_campaign(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Campaign>, ApiError> {
    let id = parse_id(&raw_id).ok_or(ApiError::InvalidId(raw_id))?;
    state
        .catalog
        .get(id)
        .map(Json)
        .ok_or(ApiError::CampaignNotFound(id))
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        campaigns: state.catalog.count(),
    })
}
