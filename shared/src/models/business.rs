//! Forestry business (İşletme) model

use serde::{Deserialize, Serialize};

use super::danger::DangerLevel;

/// A forestry management unit joined from the registry and its report views
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub name: String,
    pub district_id: String,
    pub total_vehicles: i64,
    pub used_in_fire_vehicles: i64,
    pub danger_level: DangerLevel,
    pub vehicle_types: Vec<VehicleTypeCount>,
}

/// Number of vehicles of one type held by a business
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleTypeCount {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub count: i64,
}
