use async_trait::async_trait;
use tracing::debug;

use super::{AmenityLookup, AmenityLookupError, AmenitySnapshot};
use crate::workflows::comparison::domain::{AmenityCounts, Coordinates};

/// Deterministic amenity data for the demo cities, standing in for a real
/// geodata service. Never fails: unknown cities fall back to per-state
/// defaults and unknown states to a global default.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticAmenityCatalog;

const fn counts(
    schools: u32,
    hospitals: u32,
    grocery_stores: u32,
    public_transport: u32,
    commercial_pois: u32,
) -> AmenityCounts {
    AmenityCounts {
        schools,
        hospitals,
        grocery_stores,
        public_transport,
        commercial_pois,
    }
}

const fn point(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates {
        latitude,
        longitude,
    }
}

type CityEntry = (&'static str, AmenityCounts, Coordinates);

const CALIFORNIA_ENTRIES: &[CityEntry] = &[
    ("Los Angeles", counts(7, 3, 5, 12, 25), point(34.0522, -118.2437)),
    ("San Francisco", counts(6, 4, 6, 15, 30), point(37.7749, -122.4194)),
    ("San Diego", counts(5, 2, 4, 8, 18), point(32.7157, -117.1611)),
];

// Fallback centered on the state for cities without curated data.
const CALIFORNIA_DEFAULT: (AmenityCounts, Coordinates) =
    (counts(4, 2, 3, 7, 15), point(36.7783, -119.4179));

const OHIO_ENTRIES: &[CityEntry] = &[
    ("Columbus", counts(5, 2, 4, 8, 15), point(39.9612, -82.9988)),
    ("Cleveland", counts(4, 3, 3, 10, 12), point(41.4993, -81.6944)),
    ("Cincinnati", counts(4, 2, 3, 7, 10), point(39.1031, -84.5120)),
];

const OHIO_DEFAULT: (AmenityCounts, Coordinates) =
    (counts(3, 1, 2, 5, 8), point(40.4173, -82.9071));

const GLOBAL_DEFAULT: AmenityCounts = counts(2, 1, 2, 4, 6);

/// Cities the intake form offers for California projects.
pub const CALIFORNIA_CITIES: [&str; 10] = [
    "Los Angeles",
    "San Francisco",
    "San Diego",
    "San Jose",
    "Sacramento",
    "Oakland",
    "Fresno",
    "Long Beach",
    "Bakersfield",
    "Anaheim",
];

/// Cities the intake form offers for Ohio projects.
pub const OHIO_CITIES: [&str; 10] = [
    "Columbus",
    "Cleveland",
    "Cincinnati",
    "Toledo",
    "Akron",
    "Dayton",
    "Parma",
    "Canton",
    "Youngstown",
    "Lorain",
];

/// Zip codes offered by the city-dependent form selector. Empty for cities
/// outside the curated set.
pub fn zip_codes_for(city: &str) -> &'static [&'static str] {
    match city {
        "Los Angeles" => &["90001", "90012", "90024", "90210", "90291"],
        "San Francisco" => &["94102", "94103", "94110", "94111", "94123"],
        "San Diego" => &["92101", "92110", "92123", "92154", "92199"],
        "San Jose" => &["95110", "95112", "95116", "95125", "95131"],
        "Sacramento" => &["95814", "95816", "95818", "95825", "95833"],
        "Oakland" => &["94601", "94605", "94610", "94612", "94618"],
        "Fresno" => &["93702", "93710", "93720", "93721", "93726"],
        "Long Beach" => &["90802", "90803", "90804", "90805", "90806"],
        "Bakersfield" => &["93301", "93304", "93307", "93309", "93312"],
        "Anaheim" => &["92801", "92802", "92804", "92805", "92806"],
        "Columbus" => &["43201", "43204", "43215", "43220", "43229"],
        "Cleveland" => &["44101", "44102", "44106", "44114", "44120"],
        "Cincinnati" => &["45201", "45202", "45213", "45219", "45227"],
        "Toledo" => &["43601", "43604", "43606", "43607", "43615"],
        "Akron" => &["44301", "44303", "44307", "44310", "44320"],
        "Dayton" => &["45401", "45402", "45404", "45406", "45409"],
        "Parma" => &["44129", "44130", "44134"],
        "Canton" => &["44702", "44703", "44704", "44709", "44710"],
        "Youngstown" => &["44501", "44502", "44504", "44505", "44509"],
        "Lorain" => &["44052", "44053", "44055"],
        _ => &[],
    }
}

impl StaticAmenityCatalog {
    fn snapshot(city: &str, state: &str) -> AmenitySnapshot {
        let (entries, fallback) = match state {
            "California" => (CALIFORNIA_ENTRIES, CALIFORNIA_DEFAULT),
            "Ohio" => (OHIO_ENTRIES, OHIO_DEFAULT),
            other => {
                debug!(state = other, "unknown state, using global default amenities");
                return AmenitySnapshot {
                    counts: GLOBAL_DEFAULT,
                    coordinates: None,
                };
            }
        };

        match entries.iter().find(|(name, _, _)| *name == city) {
            Some((_, counts, coordinates)) => AmenitySnapshot {
                counts: *counts,
                coordinates: Some(*coordinates),
            },
            None => AmenitySnapshot {
                counts: fallback.0,
                coordinates: Some(fallback.1),
            },
        }
    }
}

#[async_trait]
impl AmenityLookup for StaticAmenityCatalog {
    async fn lookup(
        &self,
        city: &str,
        state: &str,
    ) -> Result<AmenitySnapshot, AmenityLookupError> {
        Ok(Self::snapshot(city, state))
    }
}
