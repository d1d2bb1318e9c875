//! Regional map view-model
//!
//! Everything the map frontend renders is a pure function of the static
//! district list, the joined businesses and the selected district id. The
//! only state is the selection held by [`MapController`].

use serde::Serialize;

use crate::models::{group_by_province, Business, DangerLevel, District, ProvinceGroup};
use crate::types::GpsCoordinates;

/// Region center shown when nothing is selected (Bursa area)
pub const DEFAULT_CENTER_E4: (i64, i64) = (402_000, 293_000);
pub const DEFAULT_ZOOM: u8 = 9;
pub const DISTRICT_ZOOM: u8 = 11;
pub const FLY_DURATION_SECS: f32 = 0.5;

pub fn default_center() -> GpsCoordinates {
    GpsCoordinates::from_e4(DEFAULT_CENTER_E4.0, DEFAULT_CENTER_E4.1)
}

/// Animated camera target
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CameraMove {
    pub center: GpsCoordinates,
    pub zoom: u8,
    pub duration_secs: f32,
}

impl CameraMove {
    pub fn region() -> Self {
        Self {
            center: default_center(),
            zoom: DEFAULT_ZOOM,
            duration_secs: FLY_DURATION_SECS,
        }
    }

    pub fn district(district: &District) -> Self {
        Self {
            center: district.coordinates,
            zoom: DISTRICT_ZOOM,
            duration_secs: FLY_DURATION_SECS,
        }
    }
}

// ============================================================================
// Marker encoding
// ============================================================================

/// Fill color for a danger bucket
pub fn danger_color(level: DangerLevel) -> &'static str {
    match level {
        DangerLevel::Low => "#22c55e",
        DangerLevel::Medium => "#eab308",
        DangerLevel::High => "#f97316",
        DangerLevel::Critical => "#ef4444",
    }
}

/// Visual encoding of one district marker
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub color: &'static str,
    pub diameter: u32,
    pub border_width: u32,
    pub pulse: bool,
    /// Glow color, present only on the selected marker
    pub glow: Option<&'static str>,
    pub scale: f32,
    /// Leaflet icon box, `[icon_size, icon_size]`
    pub icon_size: u32,
    /// Icon anchor at the box center
    pub anchor: u32,
    /// Flame glyph drawn inside the circle
    pub glyph_size: u32,
}

/// Marker style for a danger bucket and selection flag
pub fn marker_style(level: DangerLevel, selected: bool) -> MarkerStyle {
    let color = danger_color(level);
    let diameter = if selected { 40 } else { 30 };

    MarkerStyle {
        color,
        diameter,
        border_width: if selected { 4 } else { 2 },
        pulse: level == DangerLevel::Critical,
        glow: selected.then_some(color),
        scale: if selected { 1.2 } else { 1.0 },
        icon_size: diameter,
        anchor: diameter / 2,
        glyph_size: diameter / 2,
    }
}

impl MarkerStyle {
    /// Inline CSS for a div-based marker icon
    pub fn to_inline_css(&self) -> String {
        let mut css = format!(
            "width: {d}px; height: {d}px; background-color: {c}; border: {b}px solid white; \
             border-radius: 50%; box-shadow: 0 2px 8px rgba(0,0,0,0.3); display: flex; \
             align-items: center; justify-content: center;",
            d = self.diameter,
            c = self.color,
            b = self.border_width,
        );
        if self.pulse {
            css.push_str(" animation: pulse 2s infinite;");
        }
        if let Some(glow) = self.glow {
            css.push_str(&format!(
                " transform: scale({}); box-shadow: 0 0 15px {};",
                self.scale, glow
            ));
        }
        css
    }
}

/// Danger bucket of the first business mapped to the district, else `Low`
pub fn district_danger(district_id: &str, businesses: &[Business]) -> DangerLevel {
    businesses
        .iter()
        .find(|b| b.district_id == district_id)
        .map(|b| b.danger_level)
        .unwrap_or_default()
}

/// Legend entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LegendEntry {
    pub level: DangerLevel,
    pub label: &'static str,
    pub color: &'static str,
}

/// Legend in ascending severity
pub fn legend() -> Vec<LegendEntry> {
    DangerLevel::ALL
        .iter()
        .map(|&level| LegendEntry {
            level,
            label: level.label_tr(),
            color: danger_color(level),
        })
        .collect()
}

// ============================================================================
// Selection
// ============================================================================

pub type SelectionListener = Box<dyn Fn(&str)>;

/// Selection state shared by the map markers and the district buttons.
///
/// Marker clicks and button clicks both go through [`MapController::select`],
/// so either surface produces the same state and camera move.
pub struct MapController {
    districts: Vec<District>,
    selected: Option<String>,
    camera: CameraMove,
    listeners: Vec<(usize, SelectionListener)>,
    next_listener_id: usize,
}

impl Default for MapController {
    fn default() -> Self {
        Self::new(crate::models::districts())
    }
}

impl std::fmt::Debug for MapController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapController")
            .field("selected", &self.selected)
            .field("camera", &self.camera)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl MapController {
    pub fn new(districts: Vec<District>) -> Self {
        Self {
            districts,
            selected: None,
            camera: CameraMove::region(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Current camera target
    pub fn camera(&self) -> CameraMove {
        self.camera
    }

    /// Select a district and notify every subscriber.
    ///
    /// Returns the camera move, or `None` when the id is not a known district
    /// (the selection is still recorded but the camera stays put).
    pub fn select(&mut self, district_id: &str) -> Option<CameraMove> {
        self.selected = Some(district_id.to_string());
        for (_, listener) in &self.listeners {
            listener(district_id);
        }

        let target = self
            .districts
            .iter()
            .find(|d| d.id == district_id)
            .map(CameraMove::district)?;
        self.camera = target;
        Some(target)
    }

    /// Drop the selection and fly back to the region center
    pub fn clear(&mut self) -> CameraMove {
        self.selected = None;
        self.camera = CameraMove::region();
        self.camera
    }

    /// Register a selection listener; returns a handle for [`Self::unsubscribe`]
    pub fn subscribe(&mut self, listener: SelectionListener) -> usize {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: usize) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Snapshot of the map for the given businesses
    pub fn snapshot(&self, businesses: &[Business]) -> MapSnapshot {
        let mut snapshot = MapSnapshot::build(&self.districts, businesses, self.selected());
        snapshot.camera = self.camera;
        snapshot
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Popup text for a marker
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPopup {
    pub title: String,
    pub province: String,
    /// Turkish danger label, only when a business is mapped to the district
    pub danger_label: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerView {
    pub district_id: String,
    pub position: GpsCoordinates,
    pub danger: DangerLevel,
    pub selected: bool,
    pub style: MarkerStyle,
    pub popup: MarkerPopup,
}

/// Toggle button in the province-grouped district list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DistrictButton {
    pub district_id: String,
    pub name: String,
    pub danger: DangerLevel,
    pub color: &'static str,
    pub selected: bool,
}

/// Everything needed to draw the map panel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapSnapshot {
    pub camera: CameraMove,
    pub markers: Vec<MarkerView>,
    pub provinces: Vec<ProvinceGroup<DistrictButton>>,
    pub legend: Vec<LegendEntry>,
}

impl MapSnapshot {
    pub fn build(
        districts: &[District],
        businesses: &[Business],
        selected: Option<&str>,
    ) -> Self {
        let camera = selected
            .and_then(|id| districts.iter().find(|d| d.id == id))
            .map(CameraMove::district)
            .unwrap_or_else(CameraMove::region);

        let markers = districts
            .iter()
            .map(|district| {
                let danger = district_danger(&district.id, businesses);
                let is_selected = selected == Some(district.id.as_str());
                let has_business = businesses.iter().any(|b| b.district_id == district.id);

                MarkerView {
                    district_id: district.id.clone(),
                    position: district.coordinates,
                    danger,
                    selected: is_selected,
                    style: marker_style(danger, is_selected),
                    popup: MarkerPopup {
                        title: district.name.clone(),
                        province: district.province.clone(),
                        danger_label: has_business.then(|| danger.label_tr()),
                    },
                }
            })
            .collect();

        let provinces = group_by_province(districts)
            .into_iter()
            .map(|group| ProvinceGroup {
                province: group.province,
                districts: group
                    .districts
                    .into_iter()
                    .map(|district| {
                        let danger = district_danger(&district.id, businesses);
                        DistrictButton {
                            selected: selected == Some(district.id.as_str()),
                            district_id: district.id,
                            name: district.name,
                            danger,
                            color: danger_color(danger),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            camera,
            markers,
            provinces,
            legend: legend(),
        }
    }
}
