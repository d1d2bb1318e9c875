//! Fire danger buckets and their label mapping

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label used by the backend when a business has no danger row
pub const DEFAULT_DANGER_LABEL: &str = "Düşük";

/// Fire danger bucket derived from the backend's free-text danger type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum DangerLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl DangerLevel {
    /// All buckets in ascending severity
    pub const ALL: [DangerLevel; 4] = [
        DangerLevel::Low,
        DangerLevel::Medium,
        DangerLevel::High,
        DangerLevel::Critical,
    ];

    /// Ranking score shown in the danger chart
    pub fn score(&self) -> u8 {
        match self {
            DangerLevel::Low => 25,
            DangerLevel::Medium => 50,
            DangerLevel::High => 75,
            DangerLevel::Critical => 100,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DangerLevel::Low => "low",
            DangerLevel::Medium => "medium",
            DangerLevel::High => "high",
            DangerLevel::Critical => "critical",
        }
    }

    /// Turkish display label used in popups and the legend
    pub fn label_tr(&self) -> &'static str {
        match self {
            DangerLevel::Low => "Düşük",
            DangerLevel::Medium => "Orta",
            DangerLevel::High => "Yüksek",
            DangerLevel::Critical => "Kritik",
        }
    }
}

impl std::fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown danger level: {0}")]
pub struct ParseDangerLevelError(pub String);

impl std::str::FromStr for DangerLevel {
    type Err = ParseDangerLevelError;

    /// Parses the internal bucket code (`low`, `medium`, `high`, `critical`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(DangerLevel::Low),
            "medium" => Ok(DangerLevel::Medium),
            "high" => Ok(DangerLevel::High),
            "critical" => Ok(DangerLevel::Critical),
            other => Err(ParseDangerLevelError(other.to_string())),
        }
    }
}

/// Map a backend danger-type label onto a bucket.
///
/// Accepts both the Turkish spelling and its ASCII transliteration. A missing
/// label is read as [`DEFAULT_DANGER_LABEL`]; anything unrecognised is `Low`.
pub fn resolve_danger_level(label: Option<&str>) -> DangerLevel {
    match label.unwrap_or(DEFAULT_DANGER_LABEL) {
        "Çok Yüksek" | "Cok Yuksek" => DangerLevel::Critical,
        "Yüksek" | "Yuksek" => DangerLevel::High,
        "Orta" => DangerLevel::Medium,
        "Düşük" | "Dusuk" => DangerLevel::Low,
        _ => DangerLevel::Low,
    }
}
