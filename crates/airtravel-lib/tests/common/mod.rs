//! Shared fixtures for the integration tests.

use std::fs;

use airtravel_lib::{AirTravelStore, Airline, Airport, DatasetPaths, Route};
use tempfile::TempDir;

/// Airline record with the fields the tests care about; the rest are blank.
#[allow(dead_code)]
pub fn airline(id: i64, name: &str, iata: &str, icao: &str) -> Airline {
    Airline {
        id: Some(id),
        name: name.to_string(),
        alias: String::new(),
        iata: iata.to_string(),
        icao: icao.to_string(),
        callsign: String::new(),
        country: String::new(),
        active: "Y".to_string(),
    }
}

/// Airport record with the fields the tests care about; the rest are blank.
#[allow(dead_code)]
pub fn airport(id: i64, name: &str, city: &str, iata: &str, icao: &str, lat: f64, lon: f64) -> Airport {
    Airport {
        id: Some(id),
        name: name.to_string(),
        city: city.to_string(),
        country: String::new(),
        iata: iata.to_string(),
        icao: icao.to_string(),
        latitude: lat,
        longitude: lon,
        altitude_ft: 0,
        tz_offset: 0.0,
        dst: "U".to_string(),
        tz_db: String::new(),
        kind: "airport".to_string(),
        source: "test".to_string(),
    }
}

/// Direct route (zero stops) between two airport codes.
#[allow(dead_code)]
pub fn direct_route(airline: &str, src: &str, dst: &str) -> Route {
    route(airline, src, dst, 0)
}

#[allow(dead_code)]
pub fn route(airline: &str, src: &str, dst: &str, stops: i64) -> Route {
    Route {
        airline_iata: airline.to_string(),
        airline_id: None,
        src_iata: src.to_string(),
        src_id: None,
        dst_iata: dst.to_string(),
        dst_id: None,
        codeshare: String::new(),
        stops,
        equipment: String::new(),
    }
}

/// Store with no airlines and no routes, for geo-only tests.
#[allow(dead_code)]
pub fn store_with_airports(airports: Vec<Airport>) -> AirTravelStore {
    AirTravelStore::from_records(Vec::new(), airports, Vec::new())
}

/// Temporary directory holding the three dataset files.
///
/// Files start out absent; tests write only the ones a scenario needs so
/// missing-file degradation is easy to exercise.
#[allow(dead_code)]
pub struct DatasetDir {
    _temp: TempDir,
    pub paths: DatasetPaths,
}

#[allow(dead_code)]
impl DatasetDir {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let paths = DatasetPaths::in_dir(temp.path());
        Self { _temp: temp, paths }
    }

    pub fn write_airlines(&self, content: &str) {
        fs::write(&self.paths.airlines, content).expect("write airlines fixture");
    }

    pub fn write_airports(&self, content: &str) {
        fs::write(&self.paths.airports, content).expect("write airports fixture");
    }

    pub fn write_routes(&self, content: &str) {
        fs::write(&self.paths.routes, content).expect("write routes fixture");
    }
}
