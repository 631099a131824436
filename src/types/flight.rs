use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One synthetic, non-bookable flight listing.
///
/// A value object owned by the caller; equality is structural. Lists
/// returned by the sampler are sorted ascending by `departure_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub airline: String,
    pub flight_number: String,
    pub departure_time: NaiveDateTime,
    /// Always strictly after `departure_time`
    pub arrival_time: NaiveDateTime,
    /// "Hh Mm" label consistent with the timestamp delta
    pub duration: String,
    /// Currency-prefixed free-text price
    pub price: String,
    /// In the range 1..=50
    pub seats_available: u32,
}
