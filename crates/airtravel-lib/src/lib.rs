//! Air travel reference-data library entry points.
//!
//! This crate loads the OpenFlights-style reference datasets (airlines,
//! airports, routes) into an indexed in-memory store and answers point
//! lookups, substring and fuzzy searches, geospatial radius queries, and
//! two-leg itinerary searches against it. Higher-level consumers (HTTP
//! dispatch, response rendering) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod geo;
pub mod ingest;
pub mod onehop;
pub mod store;

pub use dataset::{load_datasets, DatasetPaths, LoadSummary};
pub use error::{Error, Result};
pub use geo::{airports_within_radius, distance_km};
pub use onehop::{one_hop_itineraries, OneHopItinerary};
pub use store::{AirTravelStore, Airline, AirlineId, Airport, AirportId, Route};
