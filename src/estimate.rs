use crate::airport::{self, Airport};
use crate::config::Tuning;
use crate::error::{Error, Result};

/// One row of the block-time model: flights shorter than `upper_km`
/// cruise at `cruise_kmh` and spend `buffer_min` minutes on taxi, climb
/// and approach.
struct SpeedTier {
    upper_km: f64,
    cruise_kmh: f64,
    buffer_min: f64,
}

/// Scanned in ascending order. Buckets are half-open `[lower, upper)`;
/// the last is unbounded above.
const SPEED_TIERS: [SpeedTier; 4] = [
    // short hop (regional jet / turboprop-ish)
    SpeedTier {
        upper_km: 500.0,
        cruise_kmh: 650.0,
        buffer_min: 20.0,
    },
    // short/medium haul narrow-body
    SpeedTier {
        upper_km: 2500.0,
        cruise_kmh: 830.0,
        buffer_min: 25.0,
    },
    // transcon/transatlantic wide-body
    SpeedTier {
        upper_km: 6000.0,
        cruise_kmh: 880.0,
        buffer_min: 30.0,
    },
    // ultra long haul
    SpeedTier {
        upper_km: f64::INFINITY,
        cruise_kmh: 905.0,
        buffer_min: 35.0,
    },
];

/// Routing, weather and ATC contingency applied on top of air time.
const CONTINGENCY: f64 = 1.08;

/// Result of a successful estimate. Ephemeral; callers use it to seed a
/// duration filter and throw it away.
#[derive(Debug)]
pub struct FlightEstimate {
    pub origin: &'static Airport,
    pub destination: &'static Airport,
    pub distance_km: f64,
    pub block_minutes: u32,
}

/// Advisory movie-runtime bounds derived from a block time.
#[derive(Debug)]
pub struct DurationRange {
    pub min_minutes: u32,
    pub max_minutes: u32,
}

/// Gate-to-gate estimate in whole minutes for a great-circle distance.
pub fn block_minutes(distance_km: f64) -> u32 {
    let tier = SPEED_TIERS
        .iter()
        .find(|t| distance_km < t.upper_km)
        .unwrap_or(&SPEED_TIERS[SPEED_TIERS.len() - 1]);

    let air_minutes = distance_km / tier.cruise_kmh * 60.0;
    ((air_minutes + tier.buffer_min) * CONTINGENCY).round() as u32
}

/// Looks up both airports and estimates total block time between them.
/// Unknown codes are reported per side; a self-pair is invalid input,
/// not a zero-minute flight.
pub fn estimate_flight_time(origin: &str, destination: &str) -> Result<FlightEstimate> {
    let o = airport::lookup(origin).ok_or_else(|| Error::UnknownOrigin {
        code: origin.to_string(),
    })?;
    let d = airport::lookup(destination).ok_or_else(|| Error::UnknownDestination {
        code: destination.to_string(),
    })?;
    if o.code == d.code {
        return Err(Error::SameAirport);
    }

    let distance_km = o.latlon.distance_km(d.latlon);
    Ok(FlightEstimate {
        origin: o,
        destination: d,
        distance_km,
        block_minutes: block_minutes(distance_km),
    })
}

/// Movie-runtime bounds for a given block time. Long flights get two
/// movies with a tighter buffer; short flights get one with slack for
/// boarding and taxi. Advisory defaults only.
pub fn recommend_duration(block: u32, tuning: &Tuning) -> DurationRange {
    let block = f64::from(block);
    let long = block > tuning.long_flight_min;

    let time_per_movie = if long {
        (block / 2.0).min(tuning.movie_cap_min)
    } else {
        block
    };
    let buffer = if long {
        tuning.long_buffer_min
    } else {
        tuning.short_buffer_min
    };

    let min = (time_per_movie - buffer).max(tuning.floor_min);
    let max = (min + tuning.span_min).max(time_per_movie);
    DurationRange {
        min_minutes: min.round() as u32,
        max_minutes: max.round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_are_half_open() {
        // exactly 500 km already uses the 830 km/h tier, and so on up
        assert_eq!(block_minutes(499.999), 71);
        assert_eq!(block_minutes(500.0), 66);
        assert_eq!(block_minutes(2500.0), 216);
        assert_eq!(block_minutes(6000.0), 467);
    }

    #[test]
    fn zero_distance_still_costs_ground_time() {
        // (0 + 20) * 1.08 = 21.6
        assert_eq!(block_minutes(0.0), 22);
    }

    #[test]
    fn block_minutes_are_positive() {
        for &d in &[
            0.0, 1.0, 250.0, 499.0, 500.0, 1500.0, 2499.0, 2500.0, 5999.0, 6000.0, 12000.0,
        ] {
            assert!(block_minutes(d) >= 1);
        }
    }

    #[test]
    fn block_time_grows_within_each_bucket() {
        let ladders: [&[f64]; 4] = [
            &[0.0, 100.0, 250.0, 499.0],
            &[500.0, 1000.0, 1800.0, 2499.0],
            &[2500.0, 3500.0, 4500.0, 5999.0],
            &[6000.0, 8000.0, 11000.0, 15000.0],
        ];
        for ladder in &ladders {
            for pair in ladder.windows(2) {
                assert!(block_minutes(pair[0]) <= block_minutes(pair[1]));
            }
        }
    }

    #[test]
    fn block_time_grows_along_real_routes() {
        // fixed origin, destinations at increasing distance
        let mut last = 0;
        for dest in &["LAX", "SEA", "DEN", "ORD", "JFK"] {
            let est = estimate_flight_time("SFO", dest).unwrap();
            assert!(
                est.block_minutes >= last,
                "block time inversion at SFO-{}",
                dest
            );
            last = est.block_minutes;
        }
    }

    #[test]
    fn short_hop() {
        let est = estimate_flight_time("SFO", "LAX").unwrap();
        assert!((est.distance_km - 543.66).abs() < 0.05);
        assert_eq!(est.block_minutes, 69);
    }

    #[test]
    fn transcontinental() {
        let est = estimate_flight_time("SFO", "JFK").unwrap();
        assert!((est.distance_km - 4152.06).abs() < 0.5);
        assert_eq!(est.block_minutes, 338);
    }

    #[test]
    fn same_airport_is_rejected() {
        match estimate_flight_time("SFO", "SFO").unwrap_err() {
            Error::SameAirport => {}
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn unknown_codes_identify_the_side() {
        match estimate_flight_time("XXX", "JFK").unwrap_err() {
            Error::UnknownOrigin { code } => assert_eq!(code, "XXX"),
            other => panic!("unexpected error: {}", other),
        }
        match estimate_flight_time("SFO", "YYY").unwrap_err() {
            Error::UnknownDestination { code } => assert_eq!(code, "YYY"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn unknown_origin_reported_before_self_pair() {
        match estimate_flight_time("XXX", "XXX").unwrap_err() {
            Error::UnknownOrigin { .. } => {}
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn long_flight_recommendation() {
        // 500 min: two movies, capped at 240, tight buffer
        let r = recommend_duration(500, &Tuning::default());
        assert_eq!(r.min_minutes, 225);
        assert_eq!(r.max_minutes, 240);
    }

    #[test]
    fn short_flight_recommendation() {
        let r = recommend_duration(90, &Tuning::default());
        assert_eq!(r.min_minutes, 60);
        assert_eq!(r.max_minutes, 90);
    }

    #[test]
    fn recommendation_bounds_hold_for_any_block_time() {
        let tuning = Tuning::default();
        for block in 1..=720 {
            let r = recommend_duration(block, &tuning);
            assert!(r.min_minutes >= 30, "floor broken at block {}", block);
            assert!(
                r.max_minutes >= r.min_minutes + 10,
                "span broken at block {}",
                block
            );
        }
    }

    #[test]
    fn tuning_overrides_change_the_range() {
        let tuning = Tuning {
            long_flight_min: 120.0,
            ..Tuning::default()
        };
        // 200 min is now a long flight: 100 per movie, buffer 15
        let r = recommend_duration(200, &tuning);
        assert_eq!(r.min_minutes, 85);
        assert_eq!(r.max_minutes, 100);
    }
}
