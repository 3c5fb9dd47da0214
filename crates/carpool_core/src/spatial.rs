//! Distance calculations between resolved coordinates.
//!
//! Distances are great-circle (haversine) on a sphere of radius 6371 km, which is
//! well within survey-postcode precision.

use crate::model::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres.
///
/// This is a spherical approximation, not the WGS-84 ellipsoidal geodesic that
/// tools such as geopy report. The two differ by up to ~0.5%, so rounded
/// distances and the winner of a near-tie can differ from an ellipsoidal
/// calculation.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Round to one decimal place for reporting.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
