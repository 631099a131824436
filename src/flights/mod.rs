//! Synthetic flight-offer sampling
//!
//! Pure, in-process generation of plausible flight listings. No I/O and no
//! failure path: well-formed or not, every input produces a batch. The
//! randomness source is an explicit parameter so the range and ordering
//! invariants stay reproducible under a seeded generator.

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::types::flight::FlightOffer;

const AIRLINES: [&str; 8] = [
    "Delta Air Lines",
    "United Airlines",
    "American Airlines",
    "British Airways",
    "Lufthansa",
    "Emirates",
    "Qatar Airways",
    "Singapore Airlines",
];

/// Destinations classified as long-haul, matched case-insensitively as
/// substrings of the requested destination.
const LONG_HAUL_DESTINATIONS: [&str; 6] = [
    "Tokyo",
    "Singapore",
    "Sydney",
    "Dubai",
    "Hong Kong",
    "Bangkok",
];

const CURRENCY_PREFIX: &str = "₹";

/// Sample `count` synthetic flight offers using thread-local randomness.
///
/// See [`sample_flights_with`] for the generation rules.
pub fn sample_flights(
    origin: &str,
    destination: &str,
    departure_date: &str,
    count: usize,
) -> Vec<FlightOffer> {
    sample_flights_with(origin, destination, departure_date, count, &mut rand::thread_rng())
}

/// Sample `count` synthetic flight offers from an explicit randomness source.
///
/// The long-haul classification is decided once per batch from the
/// destination. Departure hours fall in the 6 AM to 6 PM window of the given
/// date; durations are 4-12h (long-haul) or 1-4h (short-haul) plus up to 59
/// minutes. The returned batch is sorted ascending by departure time as a
/// post-condition, not as an accident of generation order.
///
/// An unparseable date degrades silently to the epoch default date instead
/// of failing; the operation itself never fails.
pub fn sample_flights_with<R: Rng + ?Sized>(
    origin: &str,
    destination: &str,
    departure_date: &str,
    count: usize,
    rng: &mut R,
) -> Vec<FlightOffer> {
    let long_haul = is_long_haul(destination);
    let base_date = departure_date.parse::<NaiveDate>().unwrap_or_default();

    debug!(
        target: "wanderplan::flights",
        origin,
        destination,
        long_haul,
        count,
        "sampling flight offers"
    );

    let mut offers: Vec<FlightOffer> = (0..count)
        .map(|_| sample_offer(base_date, long_haul, rng))
        .collect();

    offers.sort_by_key(|offer| offer.departure_time);
    offers
}

fn is_long_haul(destination: &str) -> bool {
    let needle = destination.to_lowercase();
    LONG_HAUL_DESTINATIONS
        .iter()
        .any(|city| needle.contains(&city.to_lowercase()))
}

fn sample_offer<R: Rng + ?Sized>(base_date: NaiveDate, long_haul: bool, rng: &mut R) -> FlightOffer {
    // Departures between 6 AM and 6 PM
    let departure_time = base_date.and_time(NaiveTime::MIN) + Duration::hours(rng.gen_range(6..=17));

    let duration_hours: i64 = if long_haul {
        rng.gen_range(4..=12)
    } else {
        rng.gen_range(1..=4)
    };
    let duration_minutes: i64 = rng.gen_range(0..60);
    let arrival_time =
        departure_time + Duration::hours(duration_hours) + Duration::minutes(duration_minutes);

    let airline = AIRLINES.choose(rng).copied().unwrap_or(AIRLINES[0]);
    let price: u32 = if long_haul {
        rng.gen_range(500..2500)
    } else {
        rng.gen_range(150..800)
    };

    FlightOffer {
        airline: airline.to_string(),
        flight_number: flight_number(airline, rng),
        departure_time,
        arrival_time,
        duration: duration_label(arrival_time - departure_time),
        price: format!("{CURRENCY_PREFIX}{price}"),
        seats_available: rng.gen_range(1..=50),
    }
}

fn flight_number<R: Rng + ?Sized>(airline: &str, rng: &mut R) -> String {
    let initial = airline
        .split_whitespace()
        .next()
        .and_then(|word| word.chars().next())
        .unwrap_or('X');
    format!("{initial}{}", rng.gen_range(1000..=9999))
}

fn duration_label(delta: Duration) -> String {
    format!("{}h {}m", delta.num_hours(), delta.num_minutes() % 60)
}
