//! Business list and map handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{districts, group_by_province, Business, District, ProvinceGroup};
use crate::AppState;
use shared::MapSnapshot;

#[derive(Deserialize)]
pub struct MapQuery {
    pub selected: Option<String>,
}

/// List businesses joined with vehicles, danger level and fleet
pub async fn list_businesses(State(state): State<AppState>) -> AppResult<Json<Vec<Business>>> {
    let businesses = state.dashboard.list_businesses().await?;
    Ok(Json(businesses))
}

/// Static district list grouped by province
pub async fn list_districts() -> Json<Vec<ProvinceGroup<District>>> {
    Json(group_by_province(&districts()))
}

/// Map panel: markers, province buttons, legend and camera
pub async fn get_map(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> AppResult<Json<MapSnapshot>> {
    let selected = query.selected.as_deref().filter(|id| !id.is_empty());
    let snapshot = state.dashboard.map_snapshot(selected).await?;
    Ok(Json(snapshot))
}
