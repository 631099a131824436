//! Core value types exchanged with the presentation layer

pub mod flight;
pub mod plan;
pub mod trip;

pub use flight::FlightOffer;
pub use plan::{Activity, DayPlan, TravelPlan};
pub use trip::TripRequest;
