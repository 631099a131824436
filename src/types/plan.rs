use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured itinerary produced by the plan synthesizer.
///
/// Either genuinely derived from an upstream reply or the fixed fallback
/// value when the reply could not be parsed. Collection fields default to
/// empty because the upstream model is not trusted to emit every key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlan {
    /// Brief overview of the trip
    #[serde(default)]
    pub summary: String,
    /// Destination label, parsed from the reply or inferred from the summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Day-by-day itinerary; empty only in the fallback case
    #[serde(default)]
    pub days: Vec<DayPlan>,
    /// Practical, destination-specific tips
    #[serde(default)]
    pub tips: Vec<String>,
    /// Free-text total cost as reported upstream, never a parsed number
    #[serde(default)]
    pub total_estimated_cost: String,
}

impl TravelPlan {
    /// A plan is worth rendering only when it carries at least one day.
    /// The synthesizer does not enforce this; consumers do.
    pub fn is_renderable(&self) -> bool {
        !self.days.is_empty()
    }
}

/// One day of the itinerary with its planned activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-based day counter within the itinerary
    pub day: u32,
    /// ISO calendar date for the day
    pub date: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A single planned activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Period name ("Morning") or a specific clock time
    pub time: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}
