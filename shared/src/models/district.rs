//! Static district reference data

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// A district shown as a marker on the regional map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct District {
    pub id: String,
    pub name: String,
    pub province: String,
    pub coordinates: GpsCoordinates,
}

/// (id, name, province, latitude e4, longitude e4)
const DISTRICT_TABLE: &[(&str, &str, &str, i64, i64)] = &[
    ("bursa-merkez", "Merkez", "Bursa", 401_885, 290_610),
    ("bursa-gemlik", "Gemlik", "Bursa", 404_317, 291_561),
    ("bursa-inegol", "İnegöl", "Bursa", 400_806, 295_097),
    ("bursa-iznik", "İznik", "Bursa", 404_292, 297_194),
    ("bursa-orhaneli", "Orhaneli", "Bursa", 399_006, 289_906),
    ("bursa-mkpasa", "Mustafakemalpaşa", "Bursa", 400_403, 284_117),
    ("bursa-karacabey", "Karacabey", "Bursa", 402_150, 283_617),
    ("bursa-keles", "Keles", "Bursa", 399_153, 292_303),
    ("bilecik-merkez", "Merkez", "Bilecik", 401_425, 299_793),
    ("bilecik-bozuyuk", "Bozüyük", "Bilecik", 399_078, 300_369),
    ("yalova-merkez", "Merkez", "Yalova", 406_550, 292_769),
];

/// The districts covered by the dashboard, in display order
pub fn districts() -> Vec<District> {
    DISTRICT_TABLE
        .iter()
        .map(|&(id, name, province, lat, lng)| District {
            id: id.to_string(),
            name: name.to_string(),
            province: province.to_string(),
            coordinates: GpsCoordinates::from_e4(lat, lng),
        })
        .collect()
}

/// Districts of one province, in insertion order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvinceGroup<T> {
    pub province: String,
    pub districts: Vec<T>,
}

/// Partition districts by province, keeping first-seen province order and
/// insertion order inside each province.
pub fn group_by_province(districts: &[District]) -> Vec<ProvinceGroup<District>> {
    let mut groups: Vec<ProvinceGroup<District>> = Vec::new();
    for district in districts {
        match groups.iter_mut().find(|g| g.province == district.province) {
            Some(group) => group.districts.push(district.clone()),
            None => groups.push(ProvinceGroup {
                province: district.province.clone(),
                districts: vec![district.clone()],
            }),
        }
    }
    groups
}
