//! Chart records returned by the report queries

use serde::{Deserialize, Serialize};

use super::danger::DangerLevel;
use crate::normalization::Month;

/// Vehicle inventory per business
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleData {
    pub business_name: String,
    pub total_vehicles: i64,
    pub used_vehicles: i64,
    pub excess: i64,
}

/// One bar of the danger ranking chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DangerRankingData {
    pub business_name: String,
    pub danger_score: u8,
    pub level: DangerLevel,
}

impl DangerRankingData {
    pub fn new(business_name: String, level: DangerLevel) -> Self {
        Self {
            business_name,
            danger_score: level.score(),
            level,
        }
    }
}

/// Fire count for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyFireData {
    pub month: String,
    pub count: u64,
}

impl MonthlyFireData {
    /// Twelve entries in calendar order from per-month counts
    pub fn from_counts(counts: [u64; 12]) -> Vec<Self> {
        Month::ALL
            .iter()
            .map(|month| MonthlyFireData {
                month: month.label().to_string(),
                count: counts[month.index()],
            })
            .collect()
    }

    /// Twelve zero entries, used when a year has no partition
    pub fn zero_filled() -> Vec<Self> {
        Self::from_counts([0; 12])
    }
}

/// Fire count for one calendar year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearlyFireData {
    pub year: i32,
    pub count: u64,
}

/// Fires per tree species
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TreeTypeData {
    pub tree_type: String,
    pub count: i64,
}

/// Fires per cause
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FireCauseData {
    pub cause: String,
    pub count: i64,
}
