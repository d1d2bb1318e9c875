//! Common types used across the dashboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build from fixed-point degrees with four decimal places
    pub fn from_e4(latitude_e4: i64, longitude_e4: i64) -> Self {
        Self::new(Decimal::new(latitude_e4, 4), Decimal::new(longitude_e4, 4))
    }

    /// `[lat, lng]` pair as consumed by Leaflet
    pub fn lat_lng(&self) -> [f64; 2] {
        use rust_decimal::prelude::ToPrimitive;
        [
            self.latitude.to_f64().unwrap_or_default(),
            self.longitude.to_f64().unwrap_or_default(),
        ]
    }
}
