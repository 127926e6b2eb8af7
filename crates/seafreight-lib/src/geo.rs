//! Geographic positions and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another position in kilometres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        haversine_km(self, other)
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Haversine great-circle distance between two positions, in kilometres.
///
/// Inputs are degrees; the result is symmetric and zero for identical
/// positions.
pub fn haversine_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
