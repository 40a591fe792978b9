use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::geo::LatLon;

/// A supported airport: station code, display name, position, and the
/// IANA timezone carried for display use.
#[derive(Clone, Copy, Debug)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub latlon: LatLon,
    pub timezone: &'static str,
}

/// The supported airports. Fixed at build time; extending coverage means
/// extending this table.
const AIRPORT_TABLE: [Airport; 12] = [
    Airport {
        code: "SFO",
        name: "San Francisco International",
        latlon: LatLon::new(37.6213, -122.3790),
        timezone: "America/Los_Angeles",
    },
    Airport {
        code: "LAX",
        name: "Los Angeles International",
        latlon: LatLon::new(33.9416, -118.4085),
        timezone: "America/Los_Angeles",
    },
    Airport {
        code: "SEA",
        name: "Seattle–Tacoma International",
        latlon: LatLon::new(47.4502, -122.3088),
        timezone: "America/Los_Angeles",
    },
    Airport {
        code: "JFK",
        name: "John F. Kennedy International",
        latlon: LatLon::new(40.6413, -73.7781),
        timezone: "America/New_York",
    },
    Airport {
        code: "EWR",
        name: "Newark Liberty International",
        latlon: LatLon::new(40.6895, -74.1745),
        timezone: "America/New_York",
    },
    Airport {
        code: "ORD",
        name: "Chicago O'Hare International",
        latlon: LatLon::new(41.9742, -87.9073),
        timezone: "America/Chicago",
    },
    Airport {
        code: "DFW",
        name: "Dallas/Fort Worth International",
        latlon: LatLon::new(32.8998, -97.0403),
        timezone: "America/Chicago",
    },
    Airport {
        code: "ATL",
        name: "Hartsfield–Jackson Atlanta International",
        latlon: LatLon::new(33.6407, -84.4277),
        timezone: "America/New_York",
    },
    Airport {
        code: "BOS",
        name: "Boston Logan International",
        latlon: LatLon::new(42.3656, -71.0096),
        timezone: "America/New_York",
    },
    Airport {
        code: "MIA",
        name: "Miami International",
        latlon: LatLon::new(25.7959, -80.2870),
        timezone: "America/New_York",
    },
    Airport {
        code: "DEN",
        name: "Denver International",
        latlon: LatLon::new(39.8561, -104.6737),
        timezone: "America/Denver",
    },
    Airport {
        code: "IAD",
        name: "Washington Dulles International",
        latlon: LatLon::new(38.9531, -77.4565),
        timezone: "America/New_York",
    },
];

lazy_static! {
    static ref BY_CODE: HashMap<&'static str, &'static Airport> =
        AIRPORT_TABLE.iter().map(|a| (a.code, a)).collect();
}

/// Case-sensitive lookup by station code.
pub fn lookup(code: &str) -> Option<&'static Airport> {
    BY_CODE.get(code).copied()
}

pub fn all() -> impl Iterator<Item = &'static Airport> {
    AIRPORT_TABLE.iter()
}
