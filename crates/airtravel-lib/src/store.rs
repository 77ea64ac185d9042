//! Record types and the indexed in-memory store.
//!
//! The store owns every loaded record for the process lifetime. It is built
//! once from parsed records and is immutable afterwards, so query handlers
//! can share it by reference without locking.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

/// Numeric identifier for an airline record.
pub type AirlineId = i64;

/// Numeric identifier for an airport record.
pub type AirportId = i64;

/// Minimum Jaro-Winkler similarity for a code to qualify as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// An airline as published in the source dataset.
///
/// The identifier is absent when the source carried the `\N` sentinel or a
/// value that did not parse; such records stay reachable through the code
/// indices only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airline {
    pub id: Option<AirlineId>,
    pub name: String,
    pub alias: String,
    /// 2-letter IATA code; may be blank.
    pub iata: String,
    /// 3-letter ICAO code.
    pub icao: String,
    pub callsign: String,
    pub country: String,
    /// "Y"/"N" free text from the source data.
    pub active: String,
}

/// An airport as published in the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub id: Option<AirportId>,
    pub name: String,
    pub city: String,
    pub country: String,
    /// 3-letter IATA code.
    pub iata: String,
    /// 4-letter ICAO code.
    pub icao: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_ft: i64,
    /// UTC offset in hours.
    pub tz_offset: f64,
    /// Single-letter daylight-saving rule code.
    pub dst: String,
    /// IANA timezone name, e.g. "America/Los_Angeles".
    pub tz_db: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
}

/// A scheduled connection between two airports.
///
/// Routes are relationship records, not entities: they carry denormalized
/// copies of the airline and airport codes/identifiers and may reference
/// identifiers that were never loaded. Resolution happens lazily through the
/// store lookups and a dangling reference is simply "not found".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub airline_iata: String,
    pub airline_id: Option<AirlineId>,
    pub src_iata: String,
    pub src_id: Option<AirportId>,
    pub dst_iata: String,
    pub dst_id: Option<AirportId>,
    /// "Y" when the route is a codeshare, blank otherwise.
    pub codeshare: String,
    pub stops: i64,
    pub equipment: String,
}

impl Route {
    /// A direct route has no intermediate stops within the single entry.
    pub fn is_direct(&self) -> bool {
        self.stops == 0
    }
}

/// In-memory indexed store over the three reference datasets.
///
/// Records live in insertion-ordered vectors; the secondary indices map codes
/// and identifiers to positions in those vectors. Duplicate codes in the
/// source data are last-write-wins, and records whose code is empty or the
/// `\N` sentinel are excluded from the code indices while remaining stored
/// and reachable by identifier.
///
/// Code lookups are exact and case-sensitive as stored. Route search
/// upper-cases both sides; name/city search lower-cases instead. The
/// per-operation conventions are intentionally not unified because doing so
/// would change match sets.
#[derive(Debug, Clone, Default)]
pub struct AirTravelStore {
    airlines: Vec<Airline>,
    airports: Vec<Airport>,
    routes: Vec<Route>,
    airlines_by_iata: HashMap<String, usize>,
    airlines_by_icao: HashMap<String, usize>,
    airlines_by_id: HashMap<AirlineId, usize>,
    airports_by_iata: HashMap<String, usize>,
    airports_by_icao: HashMap<String, usize>,
    airports_by_id: HashMap<AirportId, usize>,
}

/// True when a code should participate in a code index.
fn indexable(code: &str) -> bool {
    !code.is_empty() && code != "\\N"
}

impl AirTravelStore {
    /// Build the store and its indices from parsed records.
    ///
    /// This is the only write path; the returned store never changes again.
    pub fn from_records(airlines: Vec<Airline>, airports: Vec<Airport>, routes: Vec<Route>) -> Self {
        let mut store = Self {
            airlines,
            airports,
            routes,
            ..Self::default()
        };

        for (position, airline) in store.airlines.iter().enumerate() {
            if indexable(&airline.iata) {
                store.airlines_by_iata.insert(airline.iata.clone(), position);
            }
            if indexable(&airline.icao) {
                store.airlines_by_icao.insert(airline.icao.clone(), position);
            }
            if let Some(id) = airline.id {
                store.airlines_by_id.insert(id, position);
            }
        }

        for (position, airport) in store.airports.iter().enumerate() {
            if indexable(&airport.iata) {
                store.airports_by_iata.insert(airport.iata.clone(), position);
            }
            if indexable(&airport.icao) {
                store.airports_by_icao.insert(airport.icao.clone(), position);
            }
            if let Some(id) = airport.id {
                store.airports_by_id.insert(id, position);
            }
        }

        debug!(
            airlines = store.airlines.len(),
            airports = store.airports.len(),
            routes = store.routes.len(),
            "store indexed"
        );
        store
    }

    /// Lookup an airline by its exact IATA code.
    pub fn airline_by_iata(&self, iata: &str) -> Option<&Airline> {
        self.airlines_by_iata
            .get(iata)
            .map(|&position| &self.airlines[position])
    }

    /// Lookup an airline by its exact ICAO code.
    pub fn airline_by_icao(&self, icao: &str) -> Option<&Airline> {
        self.airlines_by_icao
            .get(icao)
            .map(|&position| &self.airlines[position])
    }

    /// Lookup an airline by numeric identifier.
    pub fn airline_by_id(&self, id: AirlineId) -> Option<&Airline> {
        self.airlines_by_id
            .get(&id)
            .map(|&position| &self.airlines[position])
    }

    /// Lookup an airport by its exact IATA code.
    pub fn airport_by_iata(&self, iata: &str) -> Option<&Airport> {
        self.airports_by_iata
            .get(iata)
            .map(|&position| &self.airports[position])
    }

    /// Lookup an airport by its exact ICAO code.
    pub fn airport_by_icao(&self, icao: &str) -> Option<&Airport> {
        self.airports_by_icao
            .get(icao)
            .map(|&position| &self.airports[position])
    }

    /// Lookup an airport by numeric identifier.
    pub fn airport_by_id(&self, id: AirportId) -> Option<&Airport> {
        self.airports_by_id
            .get(&id)
            .map(|&position| &self.airports[position])
    }

    /// Every airline, sorted by name then IATA code (case-sensitive).
    pub fn airlines(&self) -> Vec<&Airline> {
        let mut out: Vec<&Airline> = self.airlines.iter().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.iata.cmp(&b.iata)));
        out
    }

    /// Every airport, sorted by name then IATA code (case-sensitive).
    pub fn airports(&self) -> Vec<&Airport> {
        let mut out: Vec<&Airport> = self.airports.iter().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.iata.cmp(&b.iata)));
        out
    }

    /// Every route, in load order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Iterate airports in load order, without the sorting of [`Self::airports`].
    pub fn iter_airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    /// Routes whose airline, source, or destination code contains `token` as
    /// a case-insensitive substring. Linear scan over all routes.
    pub fn search_routes(&self, token: &str) -> Vec<&Route> {
        let needle = token.to_uppercase();
        self.routes
            .iter()
            .filter(|route| {
                route.airline_iata.to_uppercase().contains(&needle)
                    || route.src_iata.to_uppercase().contains(&needle)
                    || route.dst_iata.to_uppercase().contains(&needle)
            })
            .collect()
    }

    /// Routes whose endpoint codes match `src` and `dst` exactly
    /// (case-sensitive, no normalization). Linear scan over all routes.
    pub fn routes_between(&self, src: &str, dst: &str) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|route| route.src_iata == src && route.dst_iata == dst)
            .collect()
    }

    /// Resolve a free-form term to an airline.
    ///
    /// Cascade: exact IATA, then exact ICAO for 3-character terms, then the
    /// first airline (in [`Self::airlines`] order) whose lower-cased name
    /// contains the lower-cased term.
    pub fn find_airline(&self, term: &str) -> Option<&Airline> {
        if let Some(airline) = self.airline_by_iata(term) {
            return Some(airline);
        }
        if term.len() == 3 {
            if let Some(airline) = self.airline_by_icao(term) {
                return Some(airline);
            }
        }

        let needle = term.to_lowercase();
        self.airlines()
            .into_iter()
            .find(|airline| airline.name.to_lowercase().contains(&needle))
    }

    /// Resolve a free-form term to an airport.
    ///
    /// Cascade: numeric identifier when the term is all digits, then exact
    /// IATA, then exact ICAO for 4-character terms, then the first airport
    /// (in [`Self::airports`] order) whose lower-cased name or city contains
    /// the lower-cased term.
    pub fn find_airport(&self, term: &str) -> Option<&Airport> {
        if !term.is_empty() && term.chars().all(|c| c.is_ascii_digit()) {
            if let Some(airport) = term.parse().ok().and_then(|id| self.airport_by_id(id)) {
                return Some(airport);
            }
        }
        if let Some(airport) = self.airport_by_iata(term) {
            return Some(airport);
        }
        if term.len() == 4 {
            if let Some(airport) = self.airport_by_icao(term) {
                return Some(airport);
            }
        }

        let needle = term.to_lowercase();
        self.airports().into_iter().find(|airport| {
            airport.name.to_lowercase().contains(&needle)
                || airport.city.to_lowercase().contains(&needle)
        })
    }

    /// Airlines whose name, IATA, or ICAO code contains the query
    /// case-insensitively, in name order, truncated to `limit`.
    ///
    /// An empty query yields no suggestions.
    pub fn suggest_airlines(&self, query: &str, limit: usize) -> Vec<&Airline> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let mut out: Vec<&Airline> = self
            .airlines()
            .into_iter()
            .filter(|airline| {
                airline.name.to_lowercase().contains(&needle)
                    || airline.iata.to_lowercase().contains(&needle)
                    || airline.icao.to_lowercase().contains(&needle)
            })
            .collect();
        out.truncate(limit);
        out
    }

    /// Airports whose name, city, country, IATA, or ICAO code contains the
    /// query case-insensitively, in name order, truncated to `limit`.
    pub fn suggest_airports(&self, query: &str, limit: usize) -> Vec<&Airport> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let mut out: Vec<&Airport> = self
            .airports()
            .into_iter()
            .filter(|airport| {
                airport.name.to_lowercase().contains(&needle)
                    || airport.city.to_lowercase().contains(&needle)
                    || airport.country.to_lowercase().contains(&needle)
                    || airport.iata.to_lowercase().contains(&needle)
                    || airport.icao.to_lowercase().contains(&needle)
            })
            .collect();
        out.truncate(limit);
        out
    }

    /// Indexed airport IATA codes closest to `code` by Jaro-Winkler
    /// similarity, best first, ties broken by code.
    ///
    /// Used to attach "did you mean" suggestions to failed resolutions.
    pub fn closest_airport_codes(&self, code: &str, limit: usize) -> Vec<String> {
        let needle = code.to_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .airports_by_iata
            .keys()
            .map(|candidate| (strsim::jaro_winkler(&needle, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored.truncate(limit);
        scored.into_iter().map(|(_, code)| code.to_string()).collect()
    }
}
