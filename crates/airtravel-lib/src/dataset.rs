//! Dataset file locations and load orchestration.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::ingest;
use crate::store::AirTravelStore;

/// Default filename for the airline dataset.
const AIRLINES_FILENAME: &str = "airlines.dat";

/// Default filename for the airport dataset.
const AIRPORTS_FILENAME: &str = "airports.dat";

/// Default filename for the route dataset.
const ROUTES_FILENAME: &str = "routes.dat";

/// Paths to the three source dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub airlines: PathBuf,
    pub airports: PathBuf,
    pub routes: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            airlines: PathBuf::from(AIRLINES_FILENAME),
            airports: PathBuf::from(AIRPORTS_FILENAME),
            routes: PathBuf::from(ROUTES_FILENAME),
        }
    }
}

impl DatasetPaths {
    /// Resolve the default filenames inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            airlines: dir.join(AIRLINES_FILENAME),
            airports: dir.join(AIRPORTS_FILENAME),
            routes: dir.join(ROUTES_FILENAME),
        }
    }
}

/// Aggregate outcome of a [`load_datasets`] call.
///
/// A `false` flag means the corresponding file could not be read and its
/// collection degraded to empty; the other kinds still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub airlines_ok: bool,
    pub airports_ok: bool,
    pub routes_ok: bool,
    pub airlines: usize,
    pub airports: usize,
    pub routes: usize,
}

/// Load the three datasets sequentially and build the indexed store.
///
/// This is the single write phase of the store's lifetime: the returned
/// value is immutable and can be handed to concurrent query handlers as-is.
/// A missing or unreadable file is logged and yields an empty collection for
/// that kind rather than aborting the remaining loads.
pub fn load_datasets(paths: &DatasetPaths) -> (AirTravelStore, LoadSummary) {
    let mut summary = LoadSummary::default();

    let airlines = match ingest::read_airlines(&paths.airlines) {
        Ok(records) => {
            summary.airlines_ok = true;
            records
        }
        Err(err) => {
            warn!(path = %paths.airlines.display(), %err, "failed to load airlines");
            Vec::new()
        }
    };
    let airports = match ingest::read_airports(&paths.airports) {
        Ok(records) => {
            summary.airports_ok = true;
            records
        }
        Err(err) => {
            warn!(path = %paths.airports.display(), %err, "failed to load airports");
            Vec::new()
        }
    };
    let routes = match ingest::read_routes(&paths.routes) {
        Ok(records) => {
            summary.routes_ok = true;
            records
        }
        Err(err) => {
            warn!(path = %paths.routes.display(), %err, "failed to load routes");
            Vec::new()
        }
    };

    summary.airlines = airlines.len();
    summary.airports = airports.len();
    summary.routes = routes.len();

    let store = AirTravelStore::from_records(airlines, airports, routes);
    (store, summary)
}
