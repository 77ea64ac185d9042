//! Parsers for the OpenFlights-style delimited text dialect.
//!
//! Source files carry no header row. Fields are comma-separated, optionally
//! wrapped in double quotes with doubled-quote escaping, and use the literal
//! two-character sequence `\N` to mark an absent value. Parsing is
//! deliberately permissive: lines with too few fields are skipped and
//! non-numeric text coerces to the empty value instead of failing the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::store::{Airline, Airport, Route};

/// Minimum field count for an airline line.
const AIRLINE_FIELDS: usize = 8;

/// Minimum field count for an airport line.
const AIRPORT_FIELDS: usize = 14;

/// Minimum field count for a route line.
const ROUTE_FIELDS: usize = 9;

/// Split a line on commas that fall outside quoted regions.
///
/// Quote characters toggle the in-quotes flag and are kept in the raw field;
/// [`clean_field`] resolves them afterwards. A line without a trailing
/// separator still yields its final field.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                fields.push(clean_field(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(clean_field(&current));
    fields
}

/// Strip one wrapping quote pair and collapse doubled internal quotes.
///
/// Anything not wrapped in quotes is used verbatim, surrounding whitespace
/// included.
fn clean_field(raw: &str) -> String {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        raw[1..raw.len() - 1].replace("\"\"", "\"")
    } else {
        raw.to_string()
    }
}

/// Coerce an identifier field; empty, `\N`, and unparseable text are absent.
fn parse_id(field: &str) -> Option<i64> {
    if field.is_empty() || field == "\\N" {
        return None;
    }
    field.parse().ok()
}

/// Coerce an integer field with `-1` as the empty value.
fn parse_int(field: &str) -> i64 {
    parse_id(field).unwrap_or(-1)
}

/// Coerce a real field with `0.0` as the empty value.
fn parse_real(field: &str) -> f64 {
    if field.is_empty() || field == "\\N" {
        return 0.0;
    }
    field.parse().unwrap_or(0.0)
}

fn airline_from_fields(fields: &[String]) -> Airline {
    Airline {
        id: parse_id(&fields[0]),
        name: fields[1].clone(),
        alias: fields[2].clone(),
        iata: fields[3].clone(),
        icao: fields[4].clone(),
        callsign: fields[5].clone(),
        country: fields[6].clone(),
        active: fields[7].clone(),
    }
}

fn airport_from_fields(fields: &[String]) -> Airport {
    Airport {
        id: parse_id(&fields[0]),
        name: fields[1].clone(),
        city: fields[2].clone(),
        country: fields[3].clone(),
        iata: fields[4].clone(),
        icao: fields[5].clone(),
        latitude: parse_real(&fields[6]),
        longitude: parse_real(&fields[7]),
        altitude_ft: parse_int(&fields[8]),
        tz_offset: parse_real(&fields[9]),
        dst: fields[10].clone(),
        tz_db: fields[11].clone(),
        kind: fields[12].clone(),
        source: fields[13].clone(),
    }
}

fn route_from_fields(fields: &[String]) -> Route {
    Route {
        airline_iata: fields[0].clone(),
        airline_id: parse_id(&fields[1]),
        src_iata: fields[2].clone(),
        src_id: parse_id(&fields[3]),
        dst_iata: fields[4].clone(),
        dst_id: parse_id(&fields[5]),
        codeshare: fields[6].clone(),
        stops: parse_int(&fields[7]),
        equipment: fields[8].clone(),
    }
}

/// Read every well-formed line of `path` into a record.
///
/// Empty lines and lines below `min_fields` are skipped; skips are reported
/// in aggregate only. An unreadable file is the only error.
fn read_records<T>(
    path: &Path,
    min_fields: usize,
    from_fields: impl Fn(&[String]) -> T,
) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let fields = split_line(&line);
        if fields.len() < min_fields {
            skipped += 1;
            continue;
        }
        records.push(from_fields(&fields));
    }

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped lines with too few fields");
    }
    Ok(records)
}

/// Load airline records from an OpenFlights `airlines.dat`-style file.
pub fn read_airlines(path: &Path) -> Result<Vec<Airline>> {
    let airlines = read_records(path, AIRLINE_FIELDS, airline_from_fields)?;
    info!(path = %path.display(), count = airlines.len(), "loaded airlines");
    Ok(airlines)
}

/// Load airport records from an OpenFlights `airports.dat`-style file.
pub fn read_airports(path: &Path) -> Result<Vec<Airport>> {
    let airports = read_records(path, AIRPORT_FIELDS, airport_from_fields)?;
    info!(path = %path.display(), count = airports.len(), "loaded airports");
    Ok(airports)
}

/// Load route records from an OpenFlights `routes.dat`-style file.
pub fn read_routes(path: &Path) -> Result<Vec<Route>> {
    let routes = read_records(path, ROUTE_FIELDS, route_from_fields)?;
    info!(path = %path.display(), count = routes.len(), "loaded routes");
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_outside_quotes() {
        let fields = split_line(r#"507,"Heathrow","London, England",GB"#);
        assert_eq!(fields, vec!["507", "Heathrow", "London, England", "GB"]);
    }

    #[test]
    fn line_without_trailing_separator_yields_final_field() {
        assert_eq!(split_line("a,b"), vec!["a", "b"]);
        assert_eq!(split_line("a,"), vec!["a", ""]);
    }

    #[test]
    fn cleans_wrapped_quotes_and_collapses_doubled_quotes() {
        assert_eq!(clean_field(r#""O'Hare""#), "O'Hare");
        assert_eq!(clean_field(r#""Chicago ""L"" Field""#), r#"Chicago "L" Field"#);
    }

    #[test]
    fn unquoted_field_is_verbatim() {
        assert_eq!(clean_field("  padded  "), "  padded  ");
        assert_eq!(clean_field(r#"mid"quote"#), r#"mid"quote"#);
        assert_eq!(clean_field(r#"""#), r#"""#);
    }

    #[test]
    fn identifier_coercion_treats_sentinels_as_absent() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("\\N"), None);
        assert_eq!(parse_id("garbage"), None);
        assert_eq!(parse_int("\\N"), -1);
    }

    #[test]
    fn real_coercion_defaults_to_zero() {
        assert_eq!(parse_real("33.94"), 33.94);
        assert_eq!(parse_real(""), 0.0);
        assert_eq!(parse_real("\\N"), 0.0);
        assert_eq!(parse_real("garbage"), 0.0);
    }
}
