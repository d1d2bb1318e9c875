//! Map view tests
//!
//! The marker and the province button for a district share one selection
//! callback, so both must leave the map in the same state.

mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use common::fixture_reader;
use forest_fire_dashboard_backend::services::DashboardService;
use shared::{
    districts, marker_style, CameraMove, DangerLevel, MapController, MapSnapshot, DEFAULT_ZOOM,
};

/// Click the marker of a district in the rendered snapshot
fn click_marker(controller: &mut MapController, snapshot: &MapSnapshot, id: &str) -> Option<CameraMove> {
    let marker = snapshot.markers.iter().find(|m| m.district_id == id)?;
    controller.select(&marker.district_id)
}

/// Click the province-grouped button of a district
fn click_button(controller: &mut MapController, snapshot: &MapSnapshot, id: &str) -> Option<CameraMove> {
    let button = snapshot
        .provinces
        .iter()
        .flat_map(|group| group.districts.iter())
        .find(|b| b.district_id == id)?;
    controller.select(&button.district_id)
}

#[test]
fn marker_and_button_selection_are_identical() {
    let snapshot = MapSnapshot::build(&districts(), &[], None);

    for district in districts() {
        let mut via_marker = MapController::default();
        let mut via_button = MapController::default();

        let marker_move = click_marker(&mut via_marker, &snapshot, &district.id);
        let button_move = click_button(&mut via_button, &snapshot, &district.id);

        assert!(marker_move.is_some());
        assert_eq!(marker_move, button_move);
        assert_eq!(via_marker.selected(), via_button.selected());
        assert_eq!(via_marker.camera(), via_button.camera());
        assert_eq!(via_marker.camera().center, district.coordinates);
    }
}

#[test]
fn subscribers_see_every_selection() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let chart_view = seen.clone();
    let list_view = seen.clone();

    let mut controller = MapController::default();
    controller.subscribe(Box::new(move |id| chart_view.borrow_mut().push(format!("chart:{}", id))));
    controller.subscribe(Box::new(move |id| list_view.borrow_mut().push(format!("list:{}", id))));

    controller.select("bursa-iznik");

    assert_eq!(
        *seen.borrow(),
        vec!["chart:bursa-iznik".to_string(), "list:bursa-iznik".to_string()]
    );
}

#[test]
fn no_selection_centers_on_region() {
    let snapshot = MapSnapshot::build(&districts(), &[], None);
    assert_eq!(snapshot.camera, CameraMove::region());
    assert_eq!(snapshot.camera.zoom, DEFAULT_ZOOM);
    assert!(snapshot.markers.iter().all(|m| !m.selected));
}

#[tokio::test]
async fn snapshot_colors_districts_by_joined_danger() {
    let service = DashboardService::new(Arc::new(fixture_reader()));
    let snapshot = service.map_snapshot(Some("bursa-keles")).await.unwrap();

    let keles = snapshot
        .markers
        .iter()
        .find(|m| m.district_id == "bursa-keles")
        .unwrap();
    assert_eq!(keles.danger, DangerLevel::Critical);
    assert_eq!(keles.style, marker_style(DangerLevel::Critical, true));
    assert!(keles.style.pulse);

    let gemlik = snapshot
        .markers
        .iter()
        .find(|m| m.district_id == "bursa-gemlik")
        .unwrap();
    assert_eq!(gemlik.danger, DangerLevel::Medium);
    assert!(!gemlik.selected);

    // districts without a business stay low
    let yalova = snapshot
        .markers
        .iter()
        .find(|m| m.district_id == "yalova-merkez")
        .unwrap();
    assert_eq!(yalova.danger, DangerLevel::Low);
    assert_eq!(yalova.popup.danger_label, None);
}
