//! Two-leg itinerary composition over the route graph.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo;
use crate::store::{AirTravelStore, Airport, Route};

/// Kilometres to statute miles.
const KM_TO_MILES: f64 = 0.621371;

/// Number of fuzzy code suggestions attached to a failed resolution.
const SUGGESTION_LIMIT: usize = 3;

/// A two-leg itinerary `src -> via -> dst` where both legs are direct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneHopItinerary {
    pub src: String,
    pub via: String,
    pub dst: String,
    pub leg1_airline: String,
    pub leg2_airline: String,
    /// Sum of the two great-circle leg distances, in whole statute miles.
    pub total_miles: i64,
}

/// Enumerate two-leg itineraries between two airports, ranked by total
/// great-circle distance.
///
/// A query with `src == dst` is answered with an empty list, not an error;
/// an endpoint code that resolves to no airport is
/// [`Error::UnknownAirport`], distinct from an empty result. Itineraries are
/// not deduplicated: every qualifying (leg1, leg2) pair through a via
/// airport appears as its own row, so two airlines covering the same legs
/// produce two rows. Ties in total miles keep discovery order.
pub fn one_hop_itineraries(
    store: &AirTravelStore,
    src: &str,
    dst: &str,
) -> Result<Vec<OneHopItinerary>> {
    if src == dst {
        return Ok(Vec::new());
    }

    let src_airport = resolve_airport(store, src)?;
    let dst_airport = resolve_airport(store, dst)?;

    // Candidate discovery goes through the general substring search; the
    // exact-source filter below is what guarantees correctness.
    let first_legs: Vec<&Route> = store
        .search_routes(src)
        .into_iter()
        .filter(|route| route.src_iata == src && route.dst_iata != dst && route.is_direct())
        .collect();

    let mut itineraries = Vec::new();
    for leg1 in first_legs {
        let second_legs: Vec<&Route> = store
            .routes_between(&leg1.dst_iata, dst)
            .into_iter()
            .filter(|route| route.is_direct())
            .collect();
        if second_legs.is_empty() {
            continue;
        }
        let Some(via) = store.airport_by_iata(&leg1.dst_iata) else {
            continue;
        };

        let leg1_km = geo::distance_km(
            src_airport.latitude,
            src_airport.longitude,
            via.latitude,
            via.longitude,
        );
        let leg2_km = geo::distance_km(
            via.latitude,
            via.longitude,
            dst_airport.latitude,
            dst_airport.longitude,
        );
        let total_miles = ((leg1_km + leg2_km) * KM_TO_MILES).round() as i64;

        for leg2 in second_legs {
            itineraries.push(OneHopItinerary {
                src: leg1.src_iata.clone(),
                via: leg1.dst_iata.clone(),
                dst: leg2.dst_iata.clone(),
                leg1_airline: leg1.airline_iata.clone(),
                leg2_airline: leg2.airline_iata.clone(),
                total_miles,
            });
        }
    }

    // Stable sort keeps discovery order for equal totals.
    itineraries.sort_by_key(|itinerary| itinerary.total_miles);
    Ok(itineraries)
}

fn resolve_airport<'a>(store: &'a AirTravelStore, code: &str) -> Result<&'a Airport> {
    store.airport_by_iata(code).ok_or_else(|| Error::UnknownAirport {
        code: code.to_string(),
        suggestions: store.closest_airport_codes(code, SUGGESTION_LIMIT),
    })
}
