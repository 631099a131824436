//! wanderplan: AI-assisted travel itinerary planning with synthetic flight sampling
//!
//! Two independent services make up the functional core: a plan synthesizer
//! that turns trip parameters into a typed itinerary via a generative-text
//! API, and a pure flight sampler that fabricates plausible flight listings.
//! A reply that cannot be parsed degrades into a fixed fallback plan instead
//! of an error, so consumers always receive a renderable value.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wanderplan::{sample_flights, Planner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = TripRequest::new(
//!         "Mumbai",
//!         "Tokyo",
//!         "2025-06-01".parse()?,
//!         "2025-06-05".parse()?,
//!         "$3000",
//!         "2",
//!         vec!["food".to_string(), "museums".to_string()],
//!         std::env::var("GEMINI_API_KEY")?,
//!     )?;
//!
//!     let planner = Planner::for_request(&request);
//!     let plan = planner.generate_travel_plan(&request).await?;
//!     println!("{}", plan.summary);
//!
//!     let offers = sample_flights(&request.origin, &request.destination, "2025-06-01", 5);
//!     println!("{} flight options", offers.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod flights;
pub(crate) mod services;
pub mod types;

pub use crate::core::{
    build_chat_prompt, build_plan_prompt, extract_plan, fallback_plan, locate_json_object,
    GenerateContentRequest, Planner, DEFAULT_MODEL,
};
pub use crate::error::{PlannerError, Result};
pub use crate::flights::{sample_flights, sample_flights_with};
pub use crate::types::flight::FlightOffer;
pub use crate::types::plan::{Activity, DayPlan, TravelPlan};
pub use crate::types::trip::TripRequest;

#[cfg(feature = "cli")]
pub mod cli;
