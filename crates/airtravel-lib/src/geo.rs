//! Great-circle distance and radius-bounded airport search.

use crate::store::{AirTravelStore, Airport};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two coordinates, via the
/// haversine formula. Inputs are degrees.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Every loaded airport within `radius_km` of the given coordinates, paired
/// with its distance rounded to the nearest whole kilometre.
///
/// Linear scan over all airports; the datasets hold thousands of records,
/// not millions, so no spatial index is maintained.
pub fn airports_within_radius(
    store: &AirTravelStore,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> Vec<(&Airport, i64)> {
    store
        .iter_airports()
        .filter_map(|airport| {
            let distance = distance_km(lat, lon, airport.latitude, airport.longitude);
            (distance <= radius_km).then(|| (airport, distance.round() as i64))
        })
        .collect()
}
