//! WebAssembly module for the Forest Fire Dashboard
//!
//! Provides client-side computation for:
//! - Danger label and district id normalization
//! - Marker styling and the map panel snapshot
//! - District selection shared by map markers and the district list

use std::str::FromStr;

use shared::{Business, DangerLevel, MapController, MapSnapshot};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("forest fire dashboard module loaded"));
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

fn parse_level(code: &str) -> Result<DangerLevel, JsValue> {
    DangerLevel::from_str(code).map_err(|e| js_error("Invalid danger level", e))
}

/// Danger bucket code (`low`, `medium`, `high`, `critical`) for a Turkish label
#[wasm_bindgen]
pub fn resolve_danger_level(label: Option<String>) -> String {
    shared::resolve_danger_level(label.as_deref())
        .code()
        .to_string()
}

/// Ranking score (25/50/75/100) for a Turkish label
#[wasm_bindgen]
pub fn danger_score(label: Option<String>) -> u8 {
    shared::resolve_danger_level(label.as_deref()).score()
}

/// Turkish display label for a danger bucket code
#[wasm_bindgen]
pub fn danger_label(code: &str) -> Result<String, JsValue> {
    Ok(parse_level(code)?.label_tr().to_string())
}

#[wasm_bindgen]
pub fn danger_color(code: &str) -> Result<String, JsValue> {
    Ok(shared::danger_color(parse_level(code)?).to_string())
}

/// Map district id for a business name
#[wasm_bindgen]
pub fn resolve_district_id(name: Option<String>) -> Option<String> {
    shared::resolve_district_id(name.as_deref())
}

#[wasm_bindgen]
pub fn short_business_name(name: &str) -> String {
    shared::short_business_name(name)
}

/// Marker style for a danger bucket code as JSON
#[wasm_bindgen]
pub fn marker_style_json(code: &str, selected: bool) -> Result<String, JsValue> {
    let style = shared::marker_style(parse_level(code)?, selected);
    serde_json::to_string(&style).map_err(|e| js_error("Serialization error", e))
}

/// Inline CSS for a div-based marker icon
#[wasm_bindgen]
pub fn marker_css(code: &str, selected: bool) -> Result<String, JsValue> {
    Ok(shared::marker_style(parse_level(code)?, selected).to_inline_css())
}

/// Legend entries in ascending severity as JSON
#[wasm_bindgen]
pub fn legend_json() -> String {
    serde_json::to_string(&shared::legend()).unwrap_or_else(|_| "[]".to_string())
}

/// Map panel snapshot for the businesses returned by `/api/v1/businesses`
#[wasm_bindgen]
pub fn map_snapshot_json(businesses_json: &str, selected: Option<String>) -> Result<String, JsValue> {
    let businesses: Vec<Business> = serde_json::from_str(businesses_json)
        .map_err(|e| js_error("Invalid businesses JSON", e))?;
    let snapshot = MapSnapshot::build(&shared::districts(), &businesses, selected.as_deref());
    serde_json::to_string(&snapshot).map_err(|e| js_error("Serialization error", e))
}

/// Monthly counts (`[{month, count}]`) for an array of raw month names
#[wasm_bindgen]
pub fn monthly_counts_json(months_json: &str) -> Result<String, JsValue> {
    let months: Vec<Option<String>> =
        serde_json::from_str(months_json).map_err(|e| js_error("Invalid months JSON", e))?;
    let counts = shared::tally_months(months.iter().map(|m| m.as_deref()));
    serde_json::to_string(&shared::MonthlyFireData::from_counts(counts))
        .map_err(|e| js_error("Serialization error", e))
}

/// District selection shared by the map markers and the district list.
///
/// Both surfaces call [`MapSelection::select`]; subscribed chart panels get
/// the district id on every selection.
#[wasm_bindgen]
pub struct MapSelection {
    controller: MapController,
}

impl Default for MapSelection {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl MapSelection {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            controller: MapController::default(),
        }
    }

    /// Select a district; returns the camera move as JSON, or `None` for an
    /// id that is not on the map
    pub fn select(&mut self, district_id: &str) -> Option<String> {
        let camera = self.controller.select(district_id)?;
        serde_json::to_string(&camera).ok()
    }

    /// Clear the selection; returns the region camera move as JSON
    pub fn clear(&mut self) -> String {
        let camera = self.controller.clear();
        serde_json::to_string(&camera).unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<String> {
        self.controller.selected().map(str::to_string)
    }

    /// Register a JS callback receiving the selected district id
    pub fn subscribe(&mut self, callback: js_sys::Function) -> usize {
        self.controller.subscribe(Box::new(move |district_id| {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(district_id)) {
                web_sys::console::error_2(&JsValue::from_str("selection listener failed"), &err);
            }
        }))
    }

    pub fn unsubscribe(&mut self, id: usize) -> bool {
        self.controller.unsubscribe(id)
    }

    /// Current map snapshot for the given businesses JSON
    pub fn snapshot_json(&self, businesses_json: &str) -> Result<String, JsValue> {
        let businesses: Vec<Business> = serde_json::from_str(businesses_json)
            .map_err(|e| js_error("Invalid businesses JSON", e))?;
        serde_json::to_string(&self.controller.snapshot(&businesses))
            .map_err(|e| js_error("Serialization error", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_danger_level() {
        assert_eq!(resolve_danger_level(Some("Çok Yüksek".to_string())), "critical");
        assert_eq!(resolve_danger_level(Some("Yuksek".to_string())), "high");
        assert_eq!(resolve_danger_level(None), "low");
        assert_eq!(danger_score(Some("Orta".to_string())), 50);
        assert_eq!(danger_score(Some("bilinmeyen".to_string())), 25);
    }

    #[test]
    fn test_resolve_district_id() {
        assert_eq!(
            resolve_district_id(Some("Gemlik Orman İşletmesi".to_string())).as_deref(),
            Some("bursa-gemlik")
        );
        assert_eq!(resolve_district_id(Some(String::new())), None);
        assert_eq!(short_business_name("Keles Orman İşletmesi"), "Keles");
    }

    #[test]
    fn test_marker_style_json() {
        let json: serde_json::Value =
            serde_json::from_str(&marker_style_json("critical", true).unwrap()).unwrap();
        assert_eq!(json["diameter"], 40);
        assert_eq!(json["pulse"], true);
        assert_eq!(json["glow"], "#ef4444");
        assert!(marker_css("medium", false).unwrap().contains("#eab308"));
    }

    #[test]
    fn test_map_snapshot_json() {
        let businesses = r#"[{
            "id": "2", "name": "Keles", "districtId": "bursa-keles",
            "totalVehicles": 6, "usedInFireVehicles": 0,
            "dangerLevel": "critical", "vehicleTypes": []
        }]"#;
        let json: serde_json::Value = serde_json::from_str(
            &map_snapshot_json(businesses, Some("bursa-keles".to_string())).unwrap(),
        )
        .unwrap();

        assert_eq!(json["camera"]["zoom"], 11);
        let keles = json["markers"]
            .as_array()
            .unwrap()
            .iter()
            .find(|m| m["districtId"] == "bursa-keles")
            .unwrap();
        assert_eq!(keles["danger"], "critical");
        assert_eq!(keles["selected"], true);
    }

    #[test]
    fn test_monthly_counts_json() {
        let json: serde_json::Value = serde_json::from_str(
            &monthly_counts_json(r#"["Temmuz", "temmuz", "August", null]"#).unwrap(),
        )
        .unwrap();
        assert_eq!(json[6]["count"], 2);
        assert_eq!(json[7]["count"], 1);
    }

    #[test]
    fn test_selection_round_trip() {
        let mut selection = MapSelection::new();
        let camera: serde_json::Value =
            serde_json::from_str(&selection.select("bursa-iznik").unwrap()).unwrap();
        assert_eq!(camera["zoom"], 11);
        assert_eq!(selection.selected().as_deref(), Some("bursa-iznik"));

        assert_eq!(selection.select("nowhere"), None);
        assert_eq!(selection.selected().as_deref(), Some("nowhere"));

        let camera: serde_json::Value = serde_json::from_str(&selection.clear()).unwrap();
        assert_eq!(camera["zoom"], 9);
        assert_eq!(selection.selected(), None);
    }
}
