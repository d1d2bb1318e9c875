//! Raw rows of the backend tables and views the dashboard reads

use serde::Deserialize;

use super::lenient;

// ============================================================================
// Sources
// ============================================================================

/// Business registry table
pub const BUSINESS_REGISTRY: &str = "Isletme";
/// Vehicle totals and excess per business
pub const VEHICLE_EXCESS_VIEW: &str = "isletme_arac_asimi_view";
/// Danger type per business
pub const DANGER_RANKING_VIEW: &str = "isletme_tehlike_siralama_view";
/// Business to vehicle type join table
pub const BUSINESS_VEHICLES: &str = "Isletme_arac";
/// Fires per tree species
pub const TREE_TYPE_VIEW: &str = "tehlikeli_yangin_agac_view";
/// Fires per cause
pub const FIRE_CAUSE_VIEW: &str = "isletme_yangin_nedenleri_view";

/// Years with a fire incident partition, ascending
pub const FIRE_YEARS: [i32; 3] = [2023, 2024, 2025];

/// Fire incident partition for a year, if one exists
pub fn fire_partition(year: i32) -> Option<&'static str> {
    match year {
        2023 => Some("Yangin_2023"),
        2024 => Some("Yangin_2024"),
        2025 => Some("Yangin_2025"),
        _ => None,
    }
}

// ============================================================================
// Rows
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessRow {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub isletme_id: Option<String>,
    #[serde(default)]
    pub isletme_ad: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleExcessRow {
    #[serde(default)]
    pub isletme_ad: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub isletme_toplam_arac: i64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub yanginda_kullanilan_arac: i64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub arac_asimi: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DangerRow {
    #[serde(default)]
    pub isletme_ad: Option<String>,
    #[serde(default)]
    pub tehlike_turu: Option<String>,
}

/// Vehicle type embedded through the `Arac` foreign key
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleKindRow {
    #[serde(default)]
    pub arac_tur_adi: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessVehicleRow {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub isletme_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub adet: i64,
    #[serde(default, alias = "Arac")]
    pub arac: Option<VehicleKindRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FireIncidentRow {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub yangin_ay: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub isletme_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeTypeRow {
    #[serde(default)]
    pub isletme_ad: Option<String>,
    #[serde(default)]
    pub agac_tur: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub yangin_sayisi: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FireCauseRow {
    #[serde(default)]
    pub isletme_ad: Option<String>,
    #[serde(default)]
    pub yangin_neden: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub yangin_sayisi: i64,
}
