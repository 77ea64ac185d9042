mod common;

use airtravel_lib::load_datasets;
use common::DatasetDir;

const AIRLINES: &str = "324,\"All Nippon Airways\",\"ANA All Nippon Airways\",\"NH\",\"ANA\",\"ALL NIPPON\",\"Japan\",\"Y\"\n";
const AIRPORTS: &str = concat!(
    "507,\"London Heathrow\",\"London\",\"United Kingdom\",\"LHR\",\"EGLL\",51.4706,-0.461941,83,0,\"E\",\"Europe/London\",\"airport\",\"OurAirports\"\n",
    "3797,\"John F Kennedy Intl\",\"New York\",\"United States\",\"JFK\",\"KJFK\",40.639751,-73.778925,13,-5,\"A\",\"America/New_York\",\"airport\",\"OurAirports\"\n",
);
const ROUTES: &str = "NH,324,LHR,507,JFK,3797,,0,77W\n";

#[test]
fn loads_all_three_kinds_and_reports_counts() {
    let dir = DatasetDir::new();
    dir.write_airlines(AIRLINES);
    dir.write_airports(AIRPORTS);
    dir.write_routes(ROUTES);

    let (store, summary) = load_datasets(&dir.paths);

    assert!(summary.airlines_ok && summary.airports_ok && summary.routes_ok);
    assert_eq!(summary.airlines, 1);
    assert_eq!(summary.airports, 2);
    assert_eq!(summary.routes, 1);

    assert!(store.airline_by_iata("NH").is_some());
    assert_eq!(store.routes_between("LHR", "JFK").len(), 1);
}

#[test]
fn a_missing_file_degrades_to_an_empty_kind() {
    let dir = DatasetDir::new();
    dir.write_airlines(AIRLINES);
    dir.write_airports(AIRPORTS);
    // routes.dat intentionally absent

    let (store, summary) = load_datasets(&dir.paths);

    assert!(summary.airlines_ok);
    assert!(summary.airports_ok);
    assert!(!summary.routes_ok);
    assert_eq!(summary.routes, 0);

    // The other kinds still answer queries.
    assert!(store.airport_by_iata("LHR").is_some());
    assert!(store.routes().is_empty());
    assert!(store.search_routes("LHR").is_empty());
}

#[test]
fn a_partially_malformed_file_still_loads_the_good_lines() {
    let dir = DatasetDir::new();
    dir.write_airlines(concat!(
        "324,\"All Nippon Airways\",\"ANA All Nippon Airways\",\"NH\",\"ANA\",\"ALL NIPPON\",\"Japan\",\"Y\"\n",
        "999,too,short\n",
    ));
    dir.write_airports(AIRPORTS);
    dir.write_routes(ROUTES);

    let (_, summary) = load_datasets(&dir.paths);
    assert!(summary.airlines_ok, "a malformed line is not a load failure");
    assert_eq!(summary.airlines, 1);
}
