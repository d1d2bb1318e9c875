//! Report handlers for the dashboard charts and their CSV export

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::MonthlyFireData;
use crate::services::{CsvRecord, DashboardService};
use crate::AppState;

/// Year shown when the client does not pick one
pub const DEFAULT_REPORT_YEAR: i32 = 2023;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>, // "json" or "csv"
}

#[derive(Deserialize)]
pub struct MonthlyFireQuery {
    pub business_id: Option<String>,
    pub year: Option<String>,
    pub format: Option<String>,
}

#[derive(Deserialize)]
pub struct YearlyFireQuery {
    pub business_id: Option<String>,
    pub format: Option<String>,
}

#[derive(Deserialize)]
pub struct BusinessNameQuery {
    pub business_name: Option<String>,
    pub format: Option<String>,
}

/// JSON by default, CSV attachment when `format=csv`
fn report_response<T: CsvRecord>(
    data: Vec<T>,
    format: Option<&str>,
    filename: &str,
) -> AppResult<Response> {
    if format == Some("csv") {
        let csv = DashboardService::export_to_csv(&data)?;
        let disposition = format!("attachment; filename=\"{}.csv\"", filename);
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(data).into_response())
    }
}

/// Year from the query string; `None` for a label that is not a year
fn parse_year(raw: Option<&str>) -> Option<i32> {
    match raw.map(str::trim) {
        None | Some("") => Some(DEFAULT_REPORT_YEAR),
        Some(value) => value.parse().ok(),
    }
}

/// Get vehicle inventory per business
pub async fn get_vehicle_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Response> {
    let data = state.dashboard.vehicle_data().await?;
    report_response(data, query.format.as_deref(), "vehicles")
}

/// Get danger ranking
pub async fn get_danger_ranking(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Response> {
    let data = state.dashboard.danger_ranking().await?;
    report_response(data, query.format.as_deref(), "danger_ranking")
}

/// Get monthly fire counts for one year
pub async fn get_monthly_fires(
    State(state): State<AppState>,
    Query(query): Query<MonthlyFireQuery>,
) -> AppResult<Response> {
    let Some(year) = parse_year(query.year.as_deref()) else {
        tracing::debug!(year = ?query.year, "unrecognized year label");
        return report_response(
            MonthlyFireData::zero_filled(),
            query.format.as_deref(),
            "monthly_fires",
        );
    };
    let data = state
        .dashboard
        .monthly_fire_data(query.business_id.as_deref(), year)
        .await?;
    report_response(data, query.format.as_deref(), &format!("monthly_fires_{}", year))
}

/// Get fire counts per year
pub async fn get_yearly_fires(
    State(state): State<AppState>,
    Query(query): Query<YearlyFireQuery>,
) -> AppResult<Response> {
    let data = state
        .dashboard
        .yearly_fire_data(query.business_id.as_deref())
        .await?;
    report_response(data, query.format.as_deref(), "yearly_fires")
}

/// Get fires per tree species
pub async fn get_tree_types(
    State(state): State<AppState>,
    Query(query): Query<BusinessNameQuery>,
) -> AppResult<Response> {
    let data = state
        .dashboard
        .tree_type_data(query.business_name.as_deref())
        .await?;
    report_response(data, query.format.as_deref(), "tree_types")
}

/// Get fires per cause
pub async fn get_fire_causes(
    State(state): State<AppState>,
    Query(query): Query<BusinessNameQuery>,
) -> AppResult<Response> {
    let data = state
        .dashboard
        .fire_cause_data(query.business_name.as_deref())
        .await?;
    report_response(data, query.format.as_deref(), "fire_causes")
}
